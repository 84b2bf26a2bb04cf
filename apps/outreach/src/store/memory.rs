use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::store::{ClientStore, StoreError};

/// In-memory `ClientStore`. Lives as long as the process, which is the demo's
/// equivalent of one browser profile.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    /// Maximum size of a single value in bytes. `None` disables the check.
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStore {
            entries: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every operation leaves the map consistent, so a poisoned lock is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    quota,
                });
            }
        }
        debug!("store set '{key}' ({} bytes)", value.len());
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        debug!("store remove '{key}'");
        self.entries().remove(key);
    }

    fn clear(&self) {
        debug!("store clear");
        self.entries().clear();
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}
