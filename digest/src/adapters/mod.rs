//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod static_feed;
pub mod storage;

use async_trait::async_trait;
use sea_orm::Database;
use tracing::info;

use crate::config::SourceConfig;
use crate::domain::entities::DigestResult;
use crate::domain::ports::ArticleSource;
use crate::error::{FetchError, SourceError};

pub use postgres::{PostgresArticleSource, PostgresSettingsRepository};
pub use static_feed::StaticFeedSource;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};

/// The article source selected from configuration.
///
/// Built once at startup; every fetch goes to the same variant.
pub enum ConfiguredSource {
    Static(StaticFeedSource),
    Query(PostgresArticleSource),
}

impl ConfiguredSource {
    /// Build the source named by `config`, connecting to the database for
    /// the query backend
    pub async fn connect(config: &SourceConfig) -> Result<Self, FetchError> {
        match config {
            SourceConfig::StaticFeed { base_url } => {
                info!("Using static feed at {}", base_url);
                Ok(Self::Static(StaticFeedSource::new(base_url.clone())))
            }
            SourceConfig::QueryBackend { database_url } => {
                info!("Connecting to query backend...");
                let db = Database::connect(database_url.as_str())
                    .await
                    .map_err(|e| FetchError::Database(e.to_string()))?;
                info!("Query backend connected");
                Ok(Self::Query(PostgresArticleSource::new(db)))
            }
        }
    }

    /// Remote keyword storage, available only on the query backend
    pub fn settings_repository(&self) -> Option<PostgresSettingsRepository> {
        match self {
            Self::Static(_) => None,
            Self::Query(source) => Some(PostgresSettingsRepository::new(
                source.connection().clone(),
            )),
        }
    }
}

#[async_trait]
impl ArticleSource for ConfiguredSource {
    async fn fetch(&self) -> Result<DigestResult, SourceError> {
        match self {
            Self::Static(source) => source.fetch().await,
            Self::Query(source) => source.fetch().await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Static(source) => source.name(),
            Self::Query(source) => source.name(),
        }
    }
}
