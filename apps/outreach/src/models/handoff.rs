use serde::{Deserialize, Serialize};

/// What the chat page knows about the candidate the viewer was previewing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHandoff {
    pub name: String,
    pub first_name: String,
    pub job_preferences: JobPreferences,
    pub professional_interests: Vec<String>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    pub titles: Vec<String>,
    pub locations: Vec<String>,
    pub level_seniority: String,
    pub job_specifics: Vec<String>,
    pub company: String,
}

impl JobPreferences {
    /// Preferences used when the blob has nothing usable for the selected role.
    pub fn fallback() -> Self {
        JobPreferences {
            titles: vec!["Software Engineer".to_string()],
            locations: vec!["Austin, TX".to_string(), "Remote".to_string()],
            level_seniority: "Senior".to_string(),
            job_specifics: Vec::new(),
            company: "Natera".to_string(),
        }
    }
}

/// Interests used when the blob has none for the selected role.
pub fn fallback_interests() -> Vec<String> {
    [
        "career development topics",
        "back-end software engineering",
        "cloud computing",
        "new java releases",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
