use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::adapters::FileKeyValueStore;

/// Which article source the client reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// `GET <base_url>/latest.json`
    StaticFeed { base_url: String },
    /// Authenticated row queries; credentials travel in the URL
    QueryBackend { database_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    /// Directory holding the persisted preference profile
    pub state_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// - DIGEST_SOURCE: `static` (default) or `query`
    /// - DIGEST_FEED_URL: static feed base URL
    /// - DATABASE_URL: required when DIGEST_SOURCE=query
    /// - DIGEST_STATE_DIR: defaults to ~/.archdigest
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kind = var("DIGEST_SOURCE").unwrap_or_else(|| "static".to_string());

        let source = match kind.to_lowercase().as_str() {
            "static" => SourceConfig::StaticFeed {
                base_url: var("DIGEST_FEED_URL")
                    .unwrap_or_else(|| "http://localhost:5173".to_string()),
            },
            "query" => SourceConfig::QueryBackend {
                database_url: var("DATABASE_URL")
                    .context("DATABASE_URL must be set when DIGEST_SOURCE=query")?,
            },
            other => bail!("Unknown DIGEST_SOURCE: {} (expected static or query)", other),
        };

        let state_dir = var("DIGEST_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(FileKeyValueStore::default_dir);

        Ok(Self { source, state_dir })
    }
}
