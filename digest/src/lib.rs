//! archdigest
//!
//! Client-side core of an architecture news daily digest: fetches the raw
//! article list from one of two sources, keeps the reader's preference
//! profile in local storage and composes the filtered, sorted and truncated
//! digest shown to the reader.
//!
//! Uses hexagonal (ports & adapters) architecture: `domain` holds the model
//! and port traits, `adapters` the static feed, query backend and storage
//! implementations, `app` the composition and services.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use adapters::{ConfiguredSource, FileKeyValueStore, InMemoryKeyValueStore};
pub use app::{compose, DigestService, DigestView, KeywordService, PreferenceStore};
pub use config::{Config, SourceConfig};
pub use domain::entities::{
    Article, DigestResult, Keywords, MaxArticles, Period, PreferenceProfile, PreferenceUpdate,
    SummaryLength,
};
pub use error::{FetchError, ParseError, PersistenceError, SourceError};
