//! `latest.json` wire format
//!
//! ```json
//! { "generated_at": "2024-05-01T06:00:00Z",
//!   "articles": [ { "source": "...", "category": "...", "title": "...",
//!                   "url": "...", "published_at": "...", "summary": "...",
//!                   "image_url": "..." } ] }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::{Article, DigestResult};
use crate::error::ParseError;

#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    generated_at: Option<String>,
    #[serde(default)]
    articles: Vec<FeedArticle>,
}

#[derive(Debug, Deserialize)]
struct FeedArticle {
    source: String,
    category: String,
    title: String,
    url: String,
    published_at: Option<String>,
    summary: Option<String>,
    image_url: Option<String>,
}

/// Parse an ISO-8601 timestamp.
///
/// RFC 3339 strings keep their offset. Strings without an offset are read
/// as UTC; the ingestion job writes those for feeds with naive dates.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ParseError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ParseError::InvalidTimestamp {
            field,
            value: raw.to_string(),
        })
}

fn parse_optional_timestamp(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(field, value).map(Some),
    }
}

impl TryFrom<FeedArticle> for Article {
    type Error = ParseError;

    fn try_from(a: FeedArticle) -> Result<Self, Self::Error> {
        Ok(Article {
            published_at: parse_optional_timestamp("published_at", a.published_at.as_deref())?,
            source: a.source,
            category: a.category,
            title: a.title,
            url: a.url,
            summary: a.summary,
            image_url: a.image_url,
        })
    }
}

/// Parse a `latest.json` body into a digest result.
///
/// A missing `articles` key yields an empty list and a missing or null
/// `generated_at` yields `None`. Any other mismatch is an error.
pub fn parse_feed_document(body: &str) -> Result<DigestResult, ParseError> {
    let doc: FeedDocument = serde_json::from_str(body)?;

    let generated_at = parse_optional_timestamp("generated_at", doc.generated_at.as_deref())?;
    let articles = doc
        .articles
        .into_iter()
        .map(Article::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DigestResult {
        generated_at,
        articles,
    })
}
