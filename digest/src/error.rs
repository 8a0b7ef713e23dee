//! Error types for the digest core
//!
//! One enum per failure class:
//! - `FetchError`: transport or auth failure reaching an article source
//! - `ParseError`: payload does not match the expected shape
//! - `PersistenceError`: local key-value storage read/write failure
//! - `SourceError`: what an `ArticleSource` returns (fetch or parse)
//!
//! None of these are fatal to a caller. Services catch them at the point of
//! use and degrade to an empty digest or the default preference profile.

use thiserror::Error;

/// Transport/auth failures reaching an upstream source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Unauthorized - upstream rejected credentials")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(String),
}

/// Payload shape mismatches
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp in {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Unexpected shape: {0}")]
    Shape(String),
}

/// Local storage failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error returned by article sources and remote settings
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Fetch(FetchError::Request(e))
    }
}

impl From<sea_orm::DbErr> for SourceError {
    fn from(e: sea_orm::DbErr) -> Self {
        SourceError::Fetch(FetchError::Database(e.to_string()))
    }
}
