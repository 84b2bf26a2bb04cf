use serde::{Deserialize, Serialize};

/// The person walking through the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoViewer {
    pub user_name: String,
    pub user_email: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl DemoViewer {
    /// Synthesises a viewer from a `Name` URL parameter. The email is derived
    /// from the trimmed name: lowercased, whitespace runs collapsed to `.`.
    pub fn from_url_name(name: &str, timestamp: i64) -> Self {
        let user_name = name.trim().to_string();
        let local_part = user_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        DemoViewer {
            user_email: format!("{local_part}@example.com"),
            user_name,
            timestamp,
        }
    }
}
