//! Digest service
//!
//! Fetches the raw article list and composes the visible digest. Each fetch
//! is tagged with a generation number; a response whose generation has been
//! superseded by a later fetch is dropped so an old result never replaces a
//! newer one.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use super::composer::{compose, known_sources};
use crate::domain::entities::{Article, DigestResult, PreferenceProfile};
use crate::domain::ports::ArticleSource;

/// Generation of one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What the presentation layer renders after a refresh
#[derive(Debug, Clone, PartialEq)]
pub struct DigestView {
    pub generated_at: Option<DateTime<Utc>>,
    pub articles: Vec<Article>,
    /// Every source present in the fetched list, before filtering
    pub known_sources: BTreeSet<String>,
}

pub struct DigestService<A: ArticleSource> {
    source: Arc<A>,
    generation: AtomicU64,
}

impl<A: ArticleSource> DigestService<A> {
    pub fn new(source: Arc<A>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    /// Issue a ticket for a new fetch, superseding every earlier one
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no later ticket has been issued
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Fetch the raw article list.
    ///
    /// A source failure yields an empty result. Returns `None` when a newer
    /// fetch started while this one was in flight.
    pub async fn fetch(&self) -> Option<DigestResult> {
        let ticket = self.begin();
        debug!(
            "Fetching from {} (generation {})",
            self.source.name(),
            ticket.generation()
        );

        let result = match self.source.fetch().await {
            Ok(result) => {
                info!(
                    "Fetched {} articles from {}",
                    result.articles.len(),
                    self.source.name()
                );
                result
            }
            Err(e) => {
                warn!("Fetch from {} failed: {}", self.source.name(), e);
                DigestResult::empty()
            }
        };

        if !self.is_current(&ticket) {
            debug!(
                "Discarding stale response (generation {})",
                ticket.generation()
            );
            return None;
        }

        Some(result)
    }

    /// Fetch and compose the digest for `profile` at `now`
    pub async fn refresh<Tz: TimeZone>(
        &self,
        profile: &PreferenceProfile,
        now: &DateTime<Tz>,
    ) -> Option<DigestView> {
        let raw = self.fetch().await?;

        Some(DigestView {
            generated_at: raw.generated_at,
            known_sources: known_sources(&raw.articles),
            articles: compose(&raw.articles, profile, now),
        })
    }
}
