//! Body formatter: turns plain-text email bodies into inline HTML.
//!
//! # Step order
//! 1. `\n\n` → `</p><p>`
//! 2. remaining `\n` → `<br>`
//! 3. wrap in `<p>` … `</p>`
//! 4. `[text](http(s)://url)` → anchor
//! 5. bare `http(s)://` URLs → anchor, unless preceded by `"` or followed by
//!    `</a>` before the next `<`
//!
//! Reordering the steps changes the output. Step 5 relies on step 4 having
//! produced `href="…"` attributes and closed anchors, which is what the two
//! guards detect.
//!
//! Upstream content is trusted and emitted verbatim; nothing here sanitises HTML.

use std::sync::OnceLock;

use regex::{Captures, Regex};

const LINK_STYLE: &str = "color: #4599FA; text-decoration: underline;";

fn markdown_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\((https?://[^)]+)\)").expect("valid markdown link regex")
    })
}

fn bare_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s<]+").expect("valid bare url regex"))
}

/// Formats a plain-text body. Deterministic: equal inputs give equal outputs.
pub fn format_body(text: &str) -> String {
    let paragraphs = text.replace("\n\n", "</p><p>");
    let lines = paragraphs.replace('\n', "<br>");
    let wrapped = format!("<p>{lines}</p>");

    let linked = markdown_link_re().replace_all(&wrapped, |caps: &Captures| {
        anchor(&caps[2], &caps[1])
    });

    link_bare_urls(&linked)
}

fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{href}" target="_blank" style="{LINK_STYLE}">{label}</a>"#)
}

fn link_bare_urls(html: &str) -> String {
    let re = bare_url_re();
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(m) = re.find_at(html, cursor) {
        if is_bare(html, m.start(), m.end()) {
            out.push_str(&html[copied..m.start()]);
            out.push_str(&anchor(m.as_str(), m.as_str()));
            copied = m.end();
            cursor = m.end();
        } else {
            // A rejected match may still contain a linkable URL further in
            // (`"https://a?next=https://b`), so resume one byte later.
            cursor = m.start() + 1;
        }
    }

    out.push_str(&html[copied..]);
    out
}

/// The URL spanning `start..end` is linkable if it is at the start of the text
/// or not preceded by a quote, and the next tag after it is not `</a>`.
fn is_bare(html: &str, start: usize, end: usize) -> bool {
    if html[..start].ends_with('"') {
        return false;
    }

    let rest = &html[end..];
    match rest.find('<') {
        Some(tag) => !rest[tag..].starts_with("</a>"),
        None => true,
    }
}
