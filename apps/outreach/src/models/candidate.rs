use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a candidate slot in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleKey {
    BreannaAchenbach,
    OzgurAcar,
    CarolAnneWeeks,
}

impl RoleKey {
    /// Canonical order. Every normalised sequence follows it.
    pub const ALL: [RoleKey; 3] = [
        RoleKey::BreannaAchenbach,
        RoleKey::OzgurAcar,
        RoleKey::CarolAnneWeeks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::BreannaAchenbach => "breannaAchenbach",
            RoleKey::OzgurAcar => "ozgurAcar",
            RoleKey::CarolAnneWeeks => "carolAnneWeeks",
        }
    }

    pub fn descriptor(&self) -> &'static RoleDescriptor {
        match self {
            RoleKey::BreannaAchenbach => &ROLE_DESCRIPTORS[0],
            RoleKey::OzgurAcar => &ROLE_DESCRIPTORS[1],
            RoleKey::CarolAnneWeeks => &ROLE_DESCRIPTORS[2],
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown role key '{s}'"))
    }
}

/// Defaults for a candidate slot, used whenever the blob does not say otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDescriptor {
    pub key: RoleKey,
    pub display_name: &'static str,
    pub role_title: &'static str,
    pub company: &'static str,
}

pub static ROLE_DESCRIPTORS: [RoleDescriptor; 3] = [
    RoleDescriptor {
        key: RoleKey::BreannaAchenbach,
        display_name: "Breanna Achenbach",
        role_title: "Phlebotomist",
        company: "Quest Diagnostics",
    },
    RoleDescriptor {
        key: RoleKey::OzgurAcar,
        display_name: "Ozgur Acar",
        role_title: "Registered Nurse",
        company: "Stanford Health Care",
    },
    RoleDescriptor {
        key: RoleKey::CarolAnneWeeks,
        display_name: "Carol-anne Weeks",
        role_title: "Healthcare Specialist",
        company: "Amgen",
    },
];

// Branding shared by every outreach email.
pub const BRAND_LOGO_URL: &str = "/Natera logo.svg";
pub const BRAND_COMPANY_NAME: &str = "Natera";
pub const BRAND_COMPANY_WEBSITE: &str = "https://www.natera.com";

/// One normalised candidate email, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEmail {
    pub role_key: RoleKey,
    pub display_name: String,
    pub role_title: String,
    pub company: String,
    /// Raw upstream subject. May be empty.
    pub subject: String,
    /// Body after formatting; rendered verbatim.
    pub body_html: String,
    pub logo_url: String,
    pub company_name: String,
    pub company_website: String,
}

impl CandidateEmail {
    /// First whitespace-separated token of the display name.
    pub fn first_name(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }

    /// Subject to show as the email heading, with a personalised fallback for empty subjects.
    pub fn heading(&self) -> String {
        if self.subject.is_empty() {
            format!("{}, thought of you for this role", self.first_name())
        } else {
            self.subject.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(display_name: &str, subject: &str) -> CandidateEmail {
        CandidateEmail {
            role_key: RoleKey::OzgurAcar,
            display_name: display_name.to_string(),
            role_title: "Registered Nurse".to_string(),
            company: "Stanford Health Care".to_string(),
            subject: subject.to_string(),
            body_html: "<p></p>".to_string(),
            logo_url: BRAND_LOGO_URL.to_string(),
            company_name: BRAND_COMPANY_NAME.to_string(),
            company_website: BRAND_COMPANY_WEBSITE.to_string(),
        }
    }

    #[test]
    fn test_role_key_round_trips_through_str() {
        for key in RoleKey::ALL {
            assert_eq!(key.as_str().parse::<RoleKey>().unwrap(), key);
        }
        assert!("carolanneweeks".parse::<RoleKey>().is_err());
    }

    #[test]
    fn test_role_key_serde_uses_camel_case() {
        let json = serde_json::to_string(&RoleKey::CarolAnneWeeks).unwrap();
        assert_eq!(json, r#""carolAnneWeeks""#);
    }

    #[test]
    fn test_descriptors_follow_canonical_order() {
        let keys: Vec<RoleKey> = ROLE_DESCRIPTORS.iter().map(|d| d.key).collect();
        assert_eq!(keys, RoleKey::ALL.to_vec());
        assert_eq!(RoleKey::OzgurAcar.descriptor().role_title, "Registered Nurse");
    }

    #[test]
    fn test_heading_falls_back_to_first_name() {
        assert_eq!(
            record("Ozgur Acar", "").heading(),
            "Ozgur, thought of you for this role"
        );
        assert_eq!(record("Ozgur Acar", "Hello").heading(), "Hello");
    }

    #[test]
    fn test_first_name_of_blank_name_is_empty() {
        assert_eq!(record("   ", "").first_name(), "");
    }
}
