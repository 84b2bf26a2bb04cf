//! Chat handoff: what "Speak to Cleo" hands to the chat page.
//!
//! Interests and job preferences come from the blob entry of the selected
//! role. Anything missing or unparseable falls back to fixed defaults.

use serde_json::Value;
use tracing::debug;

use crate::models::blob::{role_entry, RoleEmail};
use crate::models::candidate::CandidateEmail;
use crate::models::handoff::{fallback_interests, ChatHandoff, JobPreferences};
use crate::store::{read_json, ClientStore, EMAIL_DATA_KEY};

const BULLET: char = '•';
const JOB_TITLES_LABEL: &str = "Job Titles:";
const LOCATION_LABEL: &str = "Location:";
const SENIORITY_LABEL: &str = "Seniority:";

/// Builds the handoff for `candidate`, reading its role entry from the stored blob.
pub fn handoff_from_store(
    store: &dyn ClientStore,
    candidate: &CandidateEmail,
    timestamp: i64,
) -> ChatHandoff {
    let role = read_json::<Value>(store, EMAIL_DATA_KEY)
        .and_then(|blob| role_entry(&blob, candidate.role_key));
    build_handoff(candidate, role.as_ref(), timestamp)
}

pub fn build_handoff(
    candidate: &CandidateEmail,
    role: Option<&RoleEmail>,
    timestamp: i64,
) -> ChatHandoff {
    let mut professional_interests = fallback_interests();
    let mut job_preferences = JobPreferences::fallback();

    if let Some(role) = role {
        if let Some(text) = role.interests.as_deref().filter(|t| !t.is_empty()) {
            let parsed = parse_interests(text);
            if !parsed.is_empty() {
                professional_interests = parsed;
            }
        }
        if let Some(text) = role.job_preferences.as_deref().filter(|t| !t.is_empty()) {
            job_preferences = parse_job_preferences(text, job_preferences);
        }
    }

    debug!(
        "Chat handoff for {} ({}): {} interest(s)",
        candidate.display_name,
        candidate.role_key,
        professional_interests.len()
    );

    ChatHandoff {
        name: candidate.display_name.clone(),
        first_name: candidate.first_name().to_string(),
        job_preferences,
        professional_interests,
        timestamp,
    }
}

/// Keeps lines starting with `•` (after trimming), with the bullet removed.
/// Only `•` counts as a bullet.
pub fn parse_interests(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| line.trim().starts_with(BULLET))
        .map(|line| line.replacen(BULLET, "", 1).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Overlays recognised lines onto `base`. Later lines win over earlier ones.
pub fn parse_job_preferences(text: &str, base: JobPreferences) -> JobPreferences {
    let mut prefs = base;

    for line in text.split('\n').map(str::trim) {
        if let Some(rest) = line.strip_prefix(JOB_TITLES_LABEL) {
            let titles: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            if !titles.is_empty() {
                prefs.titles = titles;
            }
        } else if let Some(rest) = line.strip_prefix(LOCATION_LABEL) {
            let location = rest.trim();
            if !location.is_empty() {
                prefs.locations = vec![location.to_string()];
            }
        } else if let Some(rest) = line.strip_prefix(SENIORITY_LABEL) {
            let seniority = rest.trim();
            if !seniority.is_empty() {
                prefs.level_seniority = seniority.to_string();
            }
        }
    }

    prefs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::RoleKey;
    use crate::preview::normaliser::fallback_record;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn ozgur() -> CandidateEmail {
        CandidateEmail {
            role_key: RoleKey::OzgurAcar,
            display_name: "Ozgur Acar".to_string(),
            ..fallback_record()
        }
    }

    #[test]
    fn test_parse_interests_strips_bullets() {
        let text = "• Cardiology\n  •  Patient advocacy \nnot a bullet\n•\n- dash";
        assert_eq!(parse_interests(text), vec!["Cardiology", "Patient advocacy"]);
    }

    #[test]
    fn test_parse_job_preferences_overlays_base() {
        let text = "Job Titles: Nurse, Charge Nurse, \nLocation:  San Francisco, CA \nSeniority: Lead\nNotes: ignored";
        let prefs = parse_job_preferences(text, JobPreferences::fallback());
        assert_eq!(prefs.titles, vec!["Nurse", "Charge Nurse"]);
        assert_eq!(prefs.locations, vec!["San Francisco, CA"]);
        assert_eq!(prefs.level_seniority, "Lead");
        assert!(prefs.job_specifics.is_empty());
        assert_eq!(prefs.company, "Natera");
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let prefs = parse_job_preferences(
            "Job Titles: , \nLocation:\nSeniority:   ",
            JobPreferences::fallback(),
        );
        assert_eq!(prefs, JobPreferences::fallback());
    }

    #[test]
    fn test_handoff_without_role_data_uses_defaults() {
        let handoff = build_handoff(&ozgur(), None, 99);
        assert_eq!(handoff.name, "Ozgur Acar");
        assert_eq!(handoff.first_name, "Ozgur");
        assert_eq!(handoff.professional_interests, fallback_interests());
        assert_eq!(handoff.job_preferences, JobPreferences::fallback());
        assert_eq!(handoff.timestamp, 99);
    }

    #[test]
    fn test_handoff_from_store_uses_selected_role() {
        let store = MemoryStore::new();
        store
            .set(
                EMAIL_DATA_KEY,
                json!({
                    "roleEmails": {
                        "breannaAchenbach": { "email": {}, "interests": "• Phlebotomy" },
                        "ozgurAcar": {
                            "email": {},
                            "interests": "• ICU nursing\n• Telehealth",
                            "job_preferences": "Seniority: Staff"
                        }
                    }
                })
                .to_string(),
            )
            .unwrap();

        let handoff = handoff_from_store(&store, &ozgur(), 1);
        assert_eq!(handoff.professional_interests, vec!["ICU nursing", "Telehealth"]);
        assert_eq!(handoff.job_preferences.level_seniority, "Staff");
        assert_eq!(handoff.job_preferences.titles, vec!["Software Engineer"]);
    }

    #[test]
    fn test_handoff_from_unparseable_blob_falls_back() {
        let store = MemoryStore::new();
        store.set(EMAIL_DATA_KEY, "not json".to_string()).unwrap();
        let handoff = handoff_from_store(&store, &ozgur(), 1);
        assert_eq!(handoff.professional_interests, fallback_interests());
    }

    #[test]
    fn test_handoff_serializes_camel_case() {
        let json = serde_json::to_value(build_handoff(&ozgur(), None, 5)).unwrap();
        assert_eq!(json["firstName"], "Ozgur");
        assert_eq!(json["jobPreferences"]["levelSeniority"], "Senior");
        assert!(json["professionalInterests"].is_array());
    }
}
