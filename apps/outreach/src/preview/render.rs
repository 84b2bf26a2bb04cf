//! HTML for the outreach preview: sticky header, email card on the left,
//! contract cards on the right.

use crate::assets::{AI_LOADER_URL, HERO_IMAGE_URL, LOGO_URL};
use crate::html::{escape, post_button};
use crate::models::candidate::CandidateEmail;
use crate::preview::carousel::CandidateCarousel;
use crate::preview::contract::CONTRACT_CARDS;
use crate::preview::view::OutreachPreview;

pub const LOADING_MESSAGE: &str = "Loading email preview...";
pub const EMPTY_MESSAGE: &str = "No email data available. Please complete the demo setup first.";

pub fn render_preview(view: &OutreachPreview) -> String {
    if view.is_loading() {
        return format!(
            r#"<div class="outreach-contract"><div class="content-wrapper"><div class="loading-message">{LOADING_MESSAGE}</div></div></div>"#
        );
    }

    let carousel = view.carousel();
    let email_card = match carousel.current() {
        Some(candidate) => render_email_card(candidate, carousel),
        None => render_empty_card(),
    };

    format!(
        r#"<div class="outreach-contract">
<div class="content-wrapper">
{header}
<div class="two-column-layout">
<div class="left-column">
{email_card}
</div>
<div class="right-column">
{cards}
</div>
</div>
</div>
</div>"#,
        header = render_header(view.is_scrolled()),
        cards = render_contract_cards(),
    )
}

fn render_header(scrolled: bool) -> String {
    let modifier = if scrolled { " scrolled" } else { "" };
    format!(
        r#"<div class="sticky-header{modifier}">
<div class="title-section">
<div class="title-with-logo"><img class="x-logo" src="{AI_LOADER_URL}" alt="AI Logo"><h1 class="page-title">All set! Ready for me to start nurturing?</h1></div>
<div class="header-buttons"><button type="button" class="header-btn-secondary">Request Changes</button><button type="button" class="header-btn-primary">Activate Cleo</button></div>
</div>
<div class="header-divider"></div>
</div>"#
    )
}

fn render_chip(label: &str, disabled: bool) -> String {
    format!(
        r#"<div class="hero-chip">{prev}<span>{label}</span>{next}</div>"#,
        prev = post_button(
            "/api/v1/preview/prev",
            "chip-arrow",
            r#"<span class="material-icons-round">chevron_left</span>"#,
            disabled,
        ),
        next = post_button(
            "/api/v1/preview/next",
            "chip-arrow",
            r#"<span class="material-icons-round">chevron_right</span>"#,
            disabled,
        ),
    )
}

fn render_email_card(candidate: &CandidateEmail, carousel: &CandidateCarousel) -> String {
    let chip_label = format!(
        "{}: {}",
        escape(&candidate.display_name),
        escape(&candidate.role_title)
    );

    format!(
        r#"<div class="email-preview-card" data-role-key="{role_key}" data-index="{index}" data-count="{count}">
<div class="email-content">
<div class="hero-section">
<div class="hero-container"><div class="hero-image-wrapper"><img src="{HERO_IMAGE_URL}" alt="Hero" class="hero-image">{chip}</div></div>
<div class="email-text-section">
<h2 class="email-heading">{heading}</h2>
<div class="email-body-text">{body}</div>
</div>
<div class="cta-section">
<div class="cta-divider"></div>
<p class="cta-text">Not quite what you were looking for? Chat to Cleo to fine-tune what content and job opportunities we share with you!</p>
{cta}
</div>
{footer}</div>
</div>"#,
        role_key = candidate.role_key,
        index = carousel.current_index(),
        count = carousel.len(),
        chip = render_chip(&chip_label, !carousel.can_navigate()),
        heading = escape(&candidate.heading()),
        body = candidate.body_html,
        cta = post_button(
            "/api/v1/preview/chat",
            "cta-button",
            r#"<span class="material-icons-round">auto_awesome</span><span>Speak to Cleo</span>"#,
            false,
        ),
        footer = render_footer(),
    )
}

fn render_empty_card() -> String {
    format!(
        r#"<div class="email-preview-card empty">
<div class="hero-chip-row">{chip}</div>
<div class="error-message">{EMPTY_MESSAGE}</div>
</div>"#,
        chip = render_chip("", true),
    )
}

fn render_footer() -> String {
    format!(
        r#"<div class="email-footer">
<img src="{LOGO_URL}" alt="Natera Logo" class="footer-logo">
<div class="footer-divider-line"></div>
<p class="footer-text">This email was sent to you because you are subscribed to the career newsletter.</p>
<div class="footer-copyright"><p>© 2024 Logoipsum Inc. All rights reserved.</p><p>Redwood City, California, USA</p></div>
</div>
"#
    )
}

fn render_contract_cards() -> String {
    CONTRACT_CARDS
        .iter()
        .map(|card| {
            format!(
                r#"<div class="contract-card"><div class="contract-icon-wrapper"><span class="material-icons-round">{icon}</span></div><div class="contract-content"><p class="contract-title">{title}</p><p class="contract-description">{description}</p></div></div>"#,
                icon = card.icon,
                title = card.title,
                description = card.description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
