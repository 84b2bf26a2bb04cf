//! Bodies of the scripted pages around the outreach preview. These are thin
//! shells: a heading, a line of copy and the buttons that move the flow along.

use crate::assets::AI_LOADER_URL;
use crate::html::{escape, navigate_button};
use crate::models::candidate::ROLE_DESCRIPTORS;
use crate::models::handoff::ChatHandoff;
use crate::models::viewer::DemoViewer;
use crate::router::{Direction, Page};
use crate::store::{read_json, ClientStore, CANDIDATE_DATA_KEY, DEMO_VIEWER_KEY};

const GOALS: [&str; 3] = [
    "Nurture silver-medalist candidates",
    "Re-engage past applicants",
    "Grow a healthcare talent pipeline",
];

/// Renders every page except the outreach preview, which owns its own view.
pub fn render_page(page: Page, store: &dyn ClientStore) -> String {
    let viewer: Option<DemoViewer> = read_json(store, DEMO_VIEWER_KEY);

    let content = match page {
        Page::DemoSetup => render_identity_form(viewer.as_ref()),
        Page::Onboarding => {
            let name = viewer
                .as_ref()
                .map(|v| v.user_name.as_str())
                .unwrap_or("there");
            format!(
                "<h1>Hi {}, I'm Cleo.</h1><p>I nurture your talent network so great candidates are ready when you need them.</p>",
                escape(name)
            )
        }
        Page::OnboardingStep2 => {
            "<h1>How I work</h1><p>I learn your brand, your openings and your audience, then write outreach that sounds like you.</p>".to_string()
        }
        Page::GoalSelection => format!(
            "<h1>What should we focus on?</h1><ul class=\"goal-list\">{}</ul>",
            GOALS
                .iter()
                .map(|goal| format!("<li>{goal}</li>"))
                .collect::<String>()
        ),
        Page::Segments => format!(
            "<h1>Who should I reach?</h1><ul class=\"segment-list\">{}</ul>",
            ROLE_DESCRIPTORS
                .iter()
                .map(|d| format!("<li>{}: {}</li>", escape(d.display_name), escape(d.role_title)))
                .collect::<String>()
        ),
        Page::Recipe1 => {
            "<h1>Your nurture recipe</h1><p>Personal milestones, relevant content and fresh openings, every three months.</p>".to_string()
        }
        Page::RecipeLoader => format!(
            "<h1>Writing your first emails…</h1><img class=\"recipe-loader\" src=\"{AI_LOADER_URL}\" alt=\"Loading\">"
        ),
        Page::Recipe2 => {
            "<h1>Recipe ready</h1><p>Review the emails I drafted for each candidate.</p>".to_string()
        }
        Page::Chat => render_chat(read_json(store, CANDIDATE_DATA_KEY)),
        Page::OutreachContract => String::new(),
    };

    let mut buttons = String::new();
    if let Some(previous) = page.previous() {
        buttons.push_str(&navigate_button(previous, Direction::Backward, "back-btn", "Back"));
    }
    if page != Page::DemoSetup {
        if let Some(next) = page.next() {
            buttons.push_str(&navigate_button(next, Direction::Forward, "continue-btn", "Continue"));
        }
    }

    format!(
        r#"<section class="page page-{page}">{content}<div class="page-actions">{buttons}</div></section>"#,
        page = page.as_str(),
    )
}

fn render_identity_form(viewer: Option<&DemoViewer>) -> String {
    let (name, email) = viewer
        .map(|v| (escape(&v.user_name), escape(&v.user_email)))
        .unwrap_or_default();
    format!(
        r#"<h1>Set up your demo</h1>
<form method="post" action="/demo-setup" class="demo-setup-form">
<label>Your name <input type="text" name="userName" value="{name}" required></label>
<label>Work email <input type="email" name="userEmail" value="{email}" required></label>
<button type="submit" class="continue-btn">Start demo</button>
</form>"#
    )
}

fn render_chat(handoff: Option<ChatHandoff>) -> String {
    let Some(handoff) = handoff else {
        return "<h1>Chat with Cleo</h1><p>Pick a candidate in the outreach preview to start a chat.</p>".to_string();
    };

    let interests: String = handoff
        .professional_interests
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();
    let prefs = &handoff.job_preferences;

    format!(
        r#"<h1>Hi {first_name}! I'm Cleo.</h1>
<p>Tell me what you'd like to hear about and I'll tune what {company} shares with you.</p>
<div class="chat-context" data-candidate="{name}">
<h2>Interests</h2><ul>{interests}</ul>
<h2>Job preferences</h2>
<p>Titles: {titles}</p>
<p>Locations: {locations}</p>
<p>Seniority: {seniority}</p>
</div>"#,
        first_name = escape(&handoff.first_name),
        company = escape(&prefs.company),
        name = escape(&handoff.name),
        titles = escape(&prefs.titles.join(", ")),
        locations = escape(&prefs.locations.join("; ")),
        seniority = escape(&prefs.level_seniority),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::handoff::{fallback_interests, JobPreferences};
    use crate::store::{write_json, MemoryStore};

    #[test]
    fn test_every_page_renders_a_section() {
        let store = MemoryStore::new();
        for page in Page::ALL {
            let html = render_page(page, &store);
            assert!(html.contains(&format!("page-{}", page.as_str())));
        }
    }

    #[test]
    fn test_identity_form_prefills_stored_viewer() {
        let store = MemoryStore::new();
        write_json(&store, DEMO_VIEWER_KEY, &DemoViewer::from_url_name("Jane Doe", 1));
        let html = render_page(Page::DemoSetup, &store);
        assert!(html.contains(r#"value="Jane Doe""#));
        assert!(html.contains(r#"value="jane.doe@example.com""#));
        assert!(!html.contains("Continue"));
    }

    #[test]
    fn test_onboarding_greets_viewer() {
        let store = MemoryStore::new();
        write_json(&store, DEMO_VIEWER_KEY, &DemoViewer::from_url_name("Sam", 1));
        assert!(render_page(Page::Onboarding, &store).contains("Hi Sam,"));
    }

    #[test]
    fn test_chat_page_reads_handoff() {
        let store = MemoryStore::new();
        let handoff = ChatHandoff {
            name: "Ozgur Acar".to_string(),
            first_name: "Ozgur".to_string(),
            job_preferences: JobPreferences::fallback(),
            professional_interests: fallback_interests(),
            timestamp: 1,
        };
        write_json(&store, CANDIDATE_DATA_KEY, &handoff);

        let html = render_page(Page::Chat, &store);
        assert!(html.contains("Hi Ozgur!"));
        assert!(html.contains("<li>cloud computing</li>"));
        assert!(html.contains("Locations: Austin, TX; Remote"));
        assert!(html.contains(r#"value="outreach-contract""#));
    }

    #[test]
    fn test_chat_page_without_handoff() {
        let html = render_page(Page::Chat, &MemoryStore::new());
        assert!(html.contains("Pick a candidate"));
    }
}
