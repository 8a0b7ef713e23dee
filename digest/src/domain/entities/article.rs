//! Article domain entity
//!
//! A single news item as delivered by an upstream source. Immutable once
//! fetched; recreated on every fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article from one of the upstream sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Source (media outlet) name, e.g. "ArchDaily"
    pub source: String,
    pub category: String,
    pub title: String,
    pub url: String,
    /// Publication time, when the upstream feed provided one
    pub published_at: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
}

/// Raw result of one fetch from an article source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestResult {
    /// When the upstream list was generated, if known
    pub generated_at: Option<DateTime<Utc>>,
    pub articles: Vec<Article>,
}

impl DigestResult {
    /// The degraded result: no articles, unknown generation time
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
