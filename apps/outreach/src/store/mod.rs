//! Persistent client store. The process-wide key/value collaborator that holds
//! the pre-generated email blob, the demo viewer and the chat handoff record.
//!
//! Reads never fail: a missing or undecodable value is reported as absent.
//! Writes report a `StoreError`, but callers in the demo flow log it and move on
//! (see `write_json`).

pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub use memory::MemoryStore;

/// Key of the blob written by the upstream email generator.
pub const EMAIL_DATA_KEY: &str = "preGeneratedEmailData";
/// Key of the handoff record written right before the chat page opens.
pub const CANDIDATE_DATA_KEY: &str = "candidateData";
/// Key of the demo viewer record.
pub const DEMO_VIEWER_KEY: &str = "demoSetupData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("value for '{key}' is {size} bytes, quota is {quota} bytes")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String-keyed, string-valued synchronous store.
pub trait ClientStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove(&self, key: &str);

    /// Wipes every key.
    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads and decodes a JSON value. Undecodable values are logged and treated as absent.
pub fn read_json<T: DeserializeOwned>(store: &dyn ClientStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Stored value under '{key}' is not valid JSON: {e}");
            None
        }
    }
}

/// Encodes and writes a JSON value. Failures are logged and swallowed; returns
/// whether the write landed.
pub fn write_json<T: Serialize>(store: &dyn ClientStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|encoded| store.set(key, encoded));

    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to persist '{key}': {e}");
            false
        }
    }
}
