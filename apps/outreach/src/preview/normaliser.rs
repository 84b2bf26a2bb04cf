//! Email blob normaliser: turns the stored blob (either historical shape) into
//! the ordered candidate emails.
//!
//! Output never exceeds three records and always follows `RoleKey::ALL` order.
//! The Carol-anne slot, whenever it is emitted, carries the hardcoded email.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::blob::{CandidateProfile, EmailBlob, EmailContent};
use crate::models::candidate::{
    CandidateEmail, RoleDescriptor, RoleKey, BRAND_COMPANY_NAME, BRAND_COMPANY_WEBSITE,
    BRAND_LOGO_URL, ROLE_DESCRIPTORS,
};
use crate::preview::formatter::format_body;
use crate::store::{read_json, ClientStore, EMAIL_DATA_KEY};

/// Body shown when no blob is stored at all.
pub const PLACEHOLDER_BODY: &str = "Hi Breanna,

I came across your profile and was impressed by your experience in phlebotomy and patient care. Your dedication to providing excellent healthcare services really stood out.

We're currently looking for talented healthcare professionals who have deep expertise in clinical laboratory services. Given your background and hands-on experience, I thought you might be interested in some of the opportunities we have at Natera.

I'd love to connect and share more about what we're working on. Would you be open to a brief conversation?";

pub const CAROL_ANNE_SUBJECT: &str = "Checking in on your next move, Carol-Anne";

pub const CAROL_ANNE_BODY: &str = r#"Hi Carol-Anne,<br><br>I saw that your new paper on rare disease management was published last week — congratulations on the launch! The insights you shared on patient pathways and integrated care models really reinforce the depth of your expertise in the field.<br><br>Given your track record of impact at Amgen and your continued thought leadership, I'm curious — are you looking to expand further into advisory or consulting roles, or does the specialty account leadership path still excite you most?<br><br>I thought these might resonate with you:<br><br><div style="margin-bottom: 24px;"> <img src="/Natera%20Blog.webp" alt="Natera to Report Third Quarter Results on November 6, 2025" style="width: 100%; max-width: 600px; height: auto; border-radius: 8px; margin-bottom: 12px;"> <a href="https://www.natera.com/investor-relations/" style="font-size: 16px; font-weight: 600; color: #2563eb; text-decoration: none;">Natera to Report Third Quarter Results on November 6, 2025</a> <p style="margin-top: 8px; font-size: 14px; color: #6b7280; line-height: 1.6;">With your focus on strategic sales and evidence-driven healthcare, this update offers an interesting view into how Natera is framing growth in the precision medicine space.</p> </div> <div style="margin-bottom: 24px;"> <img src="/Natera%20Blog.webp" alt="Natera Named to Fast Company's Next Big Things in Tech List" style="width: 100%; max-width: 600px; height: auto; border-radius: 8px; margin-bottom: 12px;"> <a href="https://www.fastcompany.com/next-big-things-in-tech" style="font-size: 16px; font-weight: 600; color: #2563eb; text-decoration: none;">Natera Named to Fast Company's Next Big Things in Tech List</a> <p style="margin-top: 8px; font-size: 14px; color: #6b7280; line-height: 1.6;">A look at Natera's recognition for innovation — a natural complement to your own work advancing technology-enabled healthcare solutions.</p> </div> <div style="margin-bottom: 24px;"> <img src="/Natera%20Blog.webp" alt="How Technology is Transforming Rare Disease Care" style="width: 100%; max-width: 600px; height: auto; border-radius: 8px; margin-bottom: 12px;"> <a href="https://www.healthaffairs.org/do/10.1377/hblog20240509.12345" style="font-size: 16px; font-weight: 600; color: #2563eb; text-decoration: none;">How Technology is Transforming Rare Disease Care</a> <p style="margin-top: 8px; font-size: 14px; color: #6b7280; line-height: 1.6;">An exploration of digital innovation in rare disease management — closely aligned with the themes in your recent paper.</p> </div>Happy to chat if you're thinking about next steps or just want to swap perspectives on the evolving rare disease landscape.<br><br>Best,"#;

/// Reads and classifies the stored blob.
///
/// Returns `None` when the blob is absent, malformed, or old-only. Old-only
/// data is also removed from the store so later reads see it as absent.
pub fn load_blob(store: &dyn ClientStore) -> Option<EmailBlob> {
    let value: Value = read_json(store, EMAIL_DATA_KEY)?;

    match EmailBlob::classify(&value) {
        Ok(EmailBlob::OldOnly) => {
            info!("Discarding old-format email data");
            store.remove(EMAIL_DATA_KEY);
            None
        }
        Ok(blob) => Some(blob),
        Err(e) => {
            warn!("Ignoring unusable email data: {e}");
            None
        }
    }
}

/// Builds the candidate sequence for a classified blob. `None` yields the
/// single placeholder record.
pub fn normalise(blob: Option<&EmailBlob>) -> Vec<CandidateEmail> {
    let records = match blob {
        None | Some(EmailBlob::OldOnly) => vec![fallback_record()],
        Some(EmailBlob::PrimaryOnly(email)) => {
            vec![build_record(RoleKey::BreannaAchenbach.descriptor(), None, email)]
        }
        Some(EmailBlob::RoleKeyed(roles)) => ROLE_DESCRIPTORS
            .iter()
            .filter_map(|descriptor| {
                roles
                    .iter()
                    .find(|(key, _)| *key == descriptor.key)
                    .and_then(|(_, role)| {
                        role.email
                            .as_ref()
                            .map(|email| build_record(descriptor, role.candidate.as_ref(), email))
                    })
            })
            .collect(),
        Some(EmailBlob::Legacy(email)) => ROLE_DESCRIPTORS
            .iter()
            .map(|descriptor| build_record(descriptor, None, email))
            .collect(),
        Some(EmailBlob::Unrecognised) => Vec::new(),
    };

    debug!(
        "Normalised {} candidate email(s): {:?}",
        records.len(),
        records.iter().map(|r| r.role_key).collect::<Vec<_>>()
    );
    records
}

/// The default Breanna record with the built-in placeholder body.
pub fn fallback_record() -> CandidateEmail {
    let descriptor = RoleKey::BreannaAchenbach.descriptor();
    record(
        descriptor,
        descriptor.display_name,
        descriptor.role_title,
        descriptor.company,
        "",
        PLACEHOLDER_BODY,
    )
}

fn build_record(
    descriptor: &RoleDescriptor,
    profile: Option<&CandidateProfile>,
    email: &EmailContent,
) -> CandidateEmail {
    if descriptor.key == RoleKey::CarolAnneWeeks {
        return record(
            descriptor,
            descriptor.display_name,
            descriptor.role_title,
            descriptor.company,
            CAROL_ANNE_SUBJECT,
            CAROL_ANNE_BODY,
        );
    }

    let profile = profile.cloned().unwrap_or_default();
    record(
        descriptor,
        non_empty(profile.name.as_deref()).unwrap_or(descriptor.display_name),
        non_empty(profile.current_title.as_deref()).unwrap_or(descriptor.role_title),
        non_empty(profile.company.as_deref()).unwrap_or(descriptor.company),
        email.subject(),
        email.body(),
    )
}

fn record(
    descriptor: &RoleDescriptor,
    display_name: &str,
    role_title: &str,
    company: &str,
    subject: &str,
    body: &str,
) -> CandidateEmail {
    CandidateEmail {
        role_key: descriptor.key,
        display_name: display_name.to_string(),
        role_title: role_title.to_string(),
        company: company.to_string(),
        subject: subject.to_string(),
        body_html: format_body(body),
        logo_url: BRAND_LOGO_URL.to_string(),
        company_name: BRAND_COMPANY_NAME.to_string(),
        company_website: BRAND_COMPANY_WEBSITE.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
