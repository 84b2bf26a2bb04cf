//! Shared HTML helpers: escaping and the application shell (sidebar, header,
//! scrollable main content) every page renders into.

use crate::assets::{AI_LOADER_URL, LOGO_URL};
use crate::router::{Direction, Page};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A form that POSTs to `action` with a single submit button.
pub fn post_button(action: &str, class: &str, label: &str, disabled: bool) -> String {
    let disabled = if disabled { " disabled" } else { "" };
    format!(
        r#"<form method="post" action="{action}" class="inline-form"><button type="submit" class="{class}"{disabled}>{label}</button></form>"#
    )
}

/// A navigation form targeting `/navigate`.
pub fn navigate_button(page: Page, direction: Direction, class: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="/navigate" class="inline-form"><input type="hidden" name="page" value="{page}"><input type="hidden" name="direction" value="{direction}"><button type="submit" class="{class}">{label}</button></form>"#,
        page = page.as_str(),
        direction = direction.as_str(),
        label = escape(label),
    )
}

/// Wraps a page body in the application chrome.
///
/// The inline script reports main-content scroll offsets back to the server
/// and mirrors the `scrolled` header modifier without a reload.
pub fn app_shell(page: Page, direction: Direction, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cleo · {title}</title>
    <link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons+Round">
</head>
<body>
<div class="app">
    <aside class="sidebar">
        <img class="sidebar-logo" src="{logo}" alt="Natera logo">
    </aside>
    <header class="header">
        <img class="header-logo" src="{loader}" alt="Cleo">
        {restart}
    </header>
    <div class="main-content" data-page="{page}" data-direction="{direction}">
{body}
    </div>
</div>
<script>
(function () {{
    var container = document.querySelector('.main-content');
    if (!container) return;
    container.addEventListener('scroll', function () {{
        var header = document.querySelector('.sticky-header');
        if (header) header.classList.toggle('scrolled', container.scrollTop > 0);
        fetch('/api/v1/scroll', {{
            method: 'POST',
            headers: {{ 'Content-Type': 'application/json' }},
            body: JSON.stringify({{ scrollTop: container.scrollTop }})
        }});
    }});
}})();
</script>
</body>
</html>
"#,
        title = escape(page.title()),
        logo = LOGO_URL,
        loader = AI_LOADER_URL,
        restart = post_button("/restart", "restart-btn", "Restart demo", false),
        page = page.as_str(),
        direction = direction.as_str(),
    )
}
