//! PostgreSQL adapters
//!
//! The authenticated query backend, implemented with SeaORM. Credentials
//! travel in the connection URL.

pub mod article_source;
pub mod settings_repo;

#[cfg(test)]
mod integration_tests;

pub use article_source::{PostgresArticleSource, RECENT_ARTICLE_LIMIT};
pub use settings_repo::PostgresSettingsRepository;
