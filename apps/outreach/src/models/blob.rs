//! Shapes of the pre-generated email blob written by the upstream generator.
//!
//! Two historical layouts coexist in stored data:
//! - legacy / primary-only: `emailData.email = { subject, body }` plus `candidate`
//! - role-keyed: `roleEmails.{breannaAchenbach,ozgurAcar,carolAnneWeeks}`
//!
//! `EmailBlob::classify` turns a parsed JSON value into one explicit variant.
//! Field presence follows JavaScript truthiness, since that is how the
//! generator decides what to emit.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::candidate::RoleKey;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailContent {
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl EmailContent {
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Candidate profile as produced by the generator (snake_case keys).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub current_title: Option<String>,
    pub company: Option<String>,
}

/// One entry of `roleEmails`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleEmail {
    pub email: Option<EmailContent>,
    pub candidate: Option<CandidateProfile>,
    /// Bullet list, one `•` line per interest.
    pub interests: Option<String>,
    /// Line-oriented `Job Titles:` / `Location:` / `Seniority:` text.
    pub job_preferences: Option<String>,
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("primary-only blob has no emailData.email")]
    MissingPrimaryEmail,
}

/// A stored blob, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailBlob {
    /// Only the primary (Breanna) email was generated.
    PrimaryOnly(EmailContent),
    /// Per-role emails, in canonical order, restricted to roles that carry an email.
    RoleKeyed(Vec<(RoleKey, RoleEmail)>),
    /// One email shared by every role.
    Legacy(EmailContent),
    /// Pre-`candidates` data; callers discard it.
    OldOnly,
    /// Nothing recognisable.
    Unrecognised,
}

impl EmailBlob {
    pub fn classify(value: &Value) -> Result<EmailBlob, BlobError> {
        let primary_email = value
            .get("emailData")
            .and_then(|data| data.get("email"))
            .filter(|email| is_truthy(email));

        if value.get("primaryOnly").is_some_and(is_truthy) {
            let email = primary_email.ok_or(BlobError::MissingPrimaryEmail)?;
            return Ok(EmailBlob::PrimaryOnly(decode_email(email)));
        }

        if let Some(role_emails) = value.get("roleEmails").filter(|v| is_truthy(v)) {
            let roles = RoleKey::ALL
                .into_iter()
                .filter_map(|key| decode_role(role_emails, key))
                .filter(|(_, role)| role.email.is_some())
                .collect();
            return Ok(EmailBlob::RoleKeyed(roles));
        }

        match primary_email {
            Some(_) if !value.get("candidates").is_some_and(is_truthy) => Ok(EmailBlob::OldOnly),
            Some(email) => Ok(EmailBlob::Legacy(decode_email(email))),
            None => Ok(EmailBlob::Unrecognised),
        }
    }
}

/// Looks up one role entry of a parsed blob, if the blob is role-keyed and the entry decodes.
pub fn role_entry(value: &Value, key: RoleKey) -> Option<RoleEmail> {
    let role_emails = value.get("roleEmails").filter(|v| is_truthy(v))?;
    decode_role(role_emails, key).map(|(_, role)| role)
}

/// Reads one role entry field by field. A mis-typed field is dropped on its
/// own; the rest of the entry survives.
fn decode_role(role_emails: &Value, key: RoleKey) -> Option<(RoleKey, RoleEmail)> {
    let raw = role_emails.get(key.as_str()).filter(|v| is_truthy(v))?;
    let role = RoleEmail {
        email: raw.get("email").filter(|v| is_truthy(v)).map(decode_email),
        candidate: raw
            .get("candidate")
            .filter(|v| is_truthy(v))
            .map(decode_profile),
        interests: text_field(raw, "interests"),
        job_preferences: text_field(raw, "job_preferences"),
    };
    Some((key, role))
}

/// A truthy non-object email decodes to an empty one.
fn decode_email(raw: &Value) -> EmailContent {
    EmailContent {
        subject: text_field(raw, "subject"),
        body: text_field(raw, "body"),
    }
}

fn decode_profile(raw: &Value) -> CandidateProfile {
    CandidateProfile {
        name: text_field(raw, "name"),
        current_title: text_field(raw, "current_title"),
        company: text_field(raw, "company"),
    }
}

/// String member of `object`. Other types count as absent.
fn text_field(object: &Value, field: &str) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            warn!("Ignoring non-string '{field}' in email data: {other}");
            None
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
