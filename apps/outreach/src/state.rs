use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::session::DemoSession;
use crate::store::ClientStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable client store. Default: MemoryStore with the configured quota.
    pub store: Arc<dyn ClientStore>,
    /// The single demo session. Handlers hold the lock for one whole event and
    /// never across an `.await`.
    pub session: Arc<Mutex<DemoSession>>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ClientStore>) -> Self {
        AppState {
            config,
            store,
            session: Arc::new(Mutex::new(DemoSession::new())),
        }
    }

    pub fn session(&self) -> MutexGuard<'_, DemoSession> {
        // Events leave the session consistent, so a poisoned lock is still usable.
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
