//! The demo session: router, mounted preview and the main scroll container.
//!
//! All mutation goes through `&mut DemoSession` behind one lock, so each
//! event is applied atomically and in dispatch order.

use std::collections::HashMap;

use tracing::info;

use crate::html::app_shell;
use crate::models::handoff::ChatHandoff;
use crate::models::viewer::DemoViewer;
use crate::pages::render_page;
use crate::preview::OutreachPreview;
use crate::router::{Direction, Page, PageRouter};
use crate::scroll::ScrollContainer;
use crate::store::{write_json, ClientStore, DEMO_VIEWER_KEY};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct DemoSession {
    router: PageRouter,
    preview: Option<OutreachPreview>,
    main_content: ScrollContainer,
}

impl DemoSession {
    pub fn new() -> Self {
        DemoSession {
            router: PageRouter::new(),
            preview: None,
            main_content: ScrollContainer::new(),
        }
    }

    #[cfg(test)]
    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    pub fn preview(&self) -> Option<&OutreachPreview> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut OutreachPreview> {
        self.preview.as_mut()
    }

    #[cfg(test)]
    pub fn main_content(&self) -> &ScrollContainer {
        &self.main_content
    }

    pub fn bootstrap(
        &mut self,
        params: &HashMap<String, String>,
        store: &dyn ClientStore,
    ) -> Option<DemoViewer> {
        let viewer = self.router.bootstrap(params, store, now_ms());
        self.sync_mounted(store);
        viewer
    }

    pub fn navigate(&mut self, page: Page, direction: Direction, store: &dyn ClientStore) {
        self.router.navigate(page, direction);
        self.sync_mounted(store);
    }

    /// Full reset: wipes the store and returns to the identity screen.
    pub fn restart(&mut self, store: &dyn ClientStore) {
        info!("Restarting demo");
        self.router.restart(store);
        self.sync_mounted(store);
    }

    /// Identity form submission. Inputs are expected to be validated already.
    pub fn submit_identity(
        &mut self,
        user_name: &str,
        user_email: &str,
        store: &dyn ClientStore,
    ) -> DemoViewer {
        let viewer = DemoViewer {
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            timestamp: now_ms(),
        };
        write_json(store, DEMO_VIEWER_KEY, &viewer);
        self.navigate(Page::Onboarding, Direction::Forward, store);
        viewer
    }

    /// "Speak to Cleo" from the preview: persist the handoff, open the chat.
    pub fn speak_to_cleo(&mut self, store: &dyn ClientStore) -> Option<ChatHandoff> {
        let handoff = self.preview.as_ref()?.speak_to_cleo(store, now_ms())?;
        self.navigate(Page::Chat, Direction::Forward, store);
        Some(handoff)
    }

    pub fn scroll(&mut self, offset: f64) {
        self.main_content.set_scroll_top(offset);
    }

    pub fn render(&self, store: &dyn ClientStore) -> String {
        let page = self.current_page();
        let body = match (&self.preview, page) {
            (Some(preview), Page::OutreachContract) => preview.render(),
            (None, Page::OutreachContract) => OutreachPreview::new().render(),
            _ => render_page(page, store),
        };
        app_shell(page, self.router.direction(), &body)
    }

    /// Mounts the preview when its page becomes current, unmounts it otherwise.
    fn sync_mounted(&mut self, store: &dyn ClientStore) {
        let on_preview = self.current_page() == Page::OutreachContract;
        match (self.preview.is_some(), on_preview) {
            (false, true) => {
                let mut preview = OutreachPreview::new();
                preview.mount(store, &self.main_content);
                self.preview = Some(preview);
            }
            (true, false) => {
                self.preview = None;
                info!("Outreach preview unmounted");
            }
            _ => {}
        }
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new()
    }
}
