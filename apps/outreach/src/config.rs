use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default per-value quota of the client store, mirroring a browser's ~5 MiB local storage.
const DEFAULT_STORE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory served at the site root (logo, hero image, blog image, loader gif).
    pub assets_dir: PathBuf,
    /// Per-value limit of the client store. `0` disables it.
    pub store_quota_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            store_quota_bytes: match std::env::var("STORE_QUOTA_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("STORE_QUOTA_BYTES must be a byte count, got '{raw}'"))?,
                Err(_) => DEFAULT_STORE_QUOTA_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            assets_dir: PathBuf::from("public"),
            store_quota_bytes: DEFAULT_STORE_QUOTA_BYTES,
        }
    }
}
