//! Page router: the mounted page, the URL bootstrap and the restart rule.

pub mod page;

use std::collections::HashMap;

use tracing::info;

use crate::models::viewer::DemoViewer;
use crate::store::{write_json, ClientStore, DEMO_VIEWER_KEY};

pub use page::{Direction, Page};

/// Query parameters checked for a viewer name, in priority order.
const NAME_PARAMS: [&str; 2] = ["Name", "name"];

#[derive(Debug, Clone, PartialEq)]
pub struct PageRouter {
    current: Page,
    direction: Direction,
    bootstrapped: bool,
}

impl PageRouter {
    pub fn new() -> Self {
        PageRouter {
            current: Page::DemoSetup,
            direction: Direction::Forward,
            bootstrapped: false,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn navigate(&mut self, page: Page, direction: Direction) {
        info!(
            "Navigate {} -> {} ({})",
            self.current,
            page,
            direction.as_str()
        );
        self.direction = direction;
        self.current = page;
    }

    /// Runs once per process. A non-empty `Name` (or `name`) parameter with no
    /// stored viewer synthesises one and skips the identity screen.
    pub fn bootstrap(
        &mut self,
        params: &HashMap<String, String>,
        store: &dyn ClientStore,
        timestamp: i64,
    ) -> Option<DemoViewer> {
        if self.bootstrapped {
            return None;
        }
        self.bootstrapped = true;

        let name = NAME_PARAMS
            .iter()
            .filter_map(|key| params.get(*key))
            .find(|value| !value.trim().is_empty())?;

        if store.get(DEMO_VIEWER_KEY).is_some() {
            return None;
        }

        let viewer = DemoViewer::from_url_name(name, timestamp);
        write_json(store, DEMO_VIEWER_KEY, &viewer);
        info!(
            "Demo viewer created from URL parameter: {} <{}>",
            viewer.user_name, viewer.user_email
        );

        self.current = Page::Onboarding;
        Some(viewer)
    }

    /// Wipes the store and returns to the identity screen.
    pub fn restart(&mut self, store: &dyn ClientStore) {
        if !store.is_empty() {
            info!("Wiping {} stored key(s)", store.len());
        }
        store.clear();
        self.navigate(Page::DemoSetup, Direction::Backward);
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{read_json, MemoryStore, EMAIL_DATA_KEY};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let router = PageRouter::new();
        assert_eq!(router.current(), Page::DemoSetup);
        assert_eq!(router.direction(), Direction::Forward);
    }

    #[test]
    fn test_navigate_records_direction() {
        let mut router = PageRouter::new();
        router.navigate(Page::Segments, Direction::Backward);
        assert_eq!(router.current(), Page::Segments);
        assert_eq!(router.direction(), Direction::Backward);
    }

    #[test]
    fn test_bootstrap_from_name_param() {
        let store = MemoryStore::new();
        let mut router = PageRouter::new();
        let viewer = router
            .bootstrap(&params(&[("Name", "Jane Doe")]), &store, 1)
            .unwrap();

        assert_eq!(viewer.user_email, "jane.doe@example.com");
        assert_eq!(router.current(), Page::Onboarding);
        let stored: DemoViewer = read_json(&store, DEMO_VIEWER_KEY).unwrap();
        assert_eq!(stored.user_name, "Jane Doe");
    }

    #[test]
    fn test_bootstrap_prefers_capitalised_param() {
        let store = MemoryStore::new();
        let mut router = PageRouter::new();
        let viewer = router
            .bootstrap(&params(&[("name", "low"), ("Name", "High")]), &store, 1)
            .unwrap();
        assert_eq!(viewer.user_name, "High");
    }

    #[test]
    fn test_bootstrap_empty_name_falls_through() {
        let store = MemoryStore::new();
        let mut router = PageRouter::new();
        let viewer = router
            .bootstrap(&params(&[("Name", ""), ("name", "lower case")]), &store, 1)
            .unwrap();
        assert_eq!(viewer.user_email, "lower.case@example.com");
    }

    #[test]
    fn test_bootstrap_ignores_whitespace_only_name() {
        let store = MemoryStore::new();
        let mut router = PageRouter::new();
        assert!(router
            .bootstrap(&params(&[("Name", "  ")]), &store, 1)
            .is_none());
        assert_eq!(router.current(), Page::DemoSetup);
        assert!(store.get(DEMO_VIEWER_KEY).is_none());

        let mut router = PageRouter::new();
        let viewer = router
            .bootstrap(&params(&[("Name", " \t"), ("name", "Lee")]), &store, 1)
            .unwrap();
        assert_eq!(viewer.user_email, "lee@example.com");
    }

    #[test]
    fn test_bootstrap_skipped_when_viewer_exists() {
        let store = MemoryStore::new();
        store.set(DEMO_VIEWER_KEY, "{}".to_string()).unwrap();
        let mut router = PageRouter::new();
        assert!(router
            .bootstrap(&params(&[("Name", "Jane")]), &store, 1)
            .is_none());
        assert_eq!(router.current(), Page::DemoSetup);
        assert_eq!(store.get(DEMO_VIEWER_KEY).as_deref(), Some("{}"));
    }

    #[test]
    fn test_bootstrap_runs_once() {
        let store = MemoryStore::new();
        let mut router = PageRouter::new();
        assert!(router.bootstrap(&params(&[]), &store, 1).is_none());
        assert!(router
            .bootstrap(&params(&[("Name", "Late")]), &store, 2)
            .is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restart_wipes_store() {
        let store = MemoryStore::new();
        store.set(EMAIL_DATA_KEY, "{}".to_string()).unwrap();
        store.set(DEMO_VIEWER_KEY, "{}".to_string()).unwrap();
        let mut router = PageRouter::new();
        router.navigate(Page::OutreachContract, Direction::Forward);

        router.restart(&store);

        assert!(store.is_empty());
        assert_eq!(router.current(), Page::DemoSetup);
        assert_eq!(router.direction(), Direction::Backward);
    }
}
