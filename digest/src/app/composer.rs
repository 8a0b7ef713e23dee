//! Digest composition
//!
//! Turns the raw article list of one fetch into the list shown to the user.
//! Pure and deterministic: the same inputs always produce the same output.
//!
//! Steps run in a fixed order because the sort tie-break and the truncation
//! depend on it:
//! 1. period filter
//! 2. source filter
//! 3. keyword filter
//! 4. stable sort, newest first, undated last
//! 5. truncate to the article limit
//! 6. shorten summaries for display

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::debug;

use crate::domain::entities::{Article, Period, PreferenceProfile};

/// Appended to a shortened summary
pub const ELLIPSIS: char = '…';

const GAP_SEARCH_STEP_MINUTES: i64 = 15;
/// Covers gaps of up to four hours
const GAP_SEARCH_STEPS: i64 = 16;

/// Oldest publication time still inside `period`, relative to `now`.
///
/// `Today` starts at midnight of `now`'s calendar day in `now`'s own time
/// zone, or at the first local time after midnight when a DST change skips
/// it.
pub fn cutoff<Tz: TimeZone>(period: Period, now: &DateTime<Tz>) -> DateTime<Utc> {
    let now_utc = now.with_timezone(&Utc);
    match period {
        Period::Today => start_of_day(now),
        Period::ThreeDays => now_utc - Duration::hours(72),
        Period::Week => now_utc - Duration::days(7),
    }
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.naive_local().date().and_time(chrono::NaiveTime::MIN);

    // A DST jump can skip midnight; the day then starts at the first local
    // time that exists
    (0..=GAP_SEARCH_STEPS)
        .map(|step| midnight + Duration::minutes(GAP_SEARCH_STEP_MINUTES * step))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

/// Newest first; undated articles after every dated one
fn by_published_desc(a: &Article, b: &Article) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Cut `summary` to `max_chars` characters, trim trailing whitespace and
/// append a single ellipsis. Summaries within the limit are returned as is.
pub fn shorten_summary(summary: &str, max_chars: usize) -> String {
    if summary.chars().count() <= max_chars {
        return summary.to_string();
    }
    let mut short: String = summary.chars().take(max_chars).collect();
    short.truncate(short.trim_end().len());
    short.push(ELLIPSIS);
    short
}

/// Compose the digest view of `raw` under `profile` at time `now`
pub fn compose<Tz: TimeZone>(
    raw: &[Article],
    profile: &PreferenceProfile,
    now: &DateTime<Tz>,
) -> Vec<Article> {
    let since = cutoff(profile.period, now);

    let mut articles: Vec<Article> = raw
        .iter()
        .filter(|a| a.published_at.map_or(true, |t| t >= since))
        .filter(|a| profile.is_source_enabled(&a.source))
        .filter(|a| {
            profile.keywords.is_empty()
                || profile.keywords.matches(&a.title)
                || a.summary
                    .as_deref()
                    .is_some_and(|s| profile.keywords.matches(s))
        })
        .cloned()
        .collect();

    // sort_by is stable: undated articles keep their input order
    articles.sort_by(by_published_desc);
    articles.truncate(profile.max_articles.count());

    let max_chars = profile.summary_length.chars();
    for article in &mut articles {
        if let Some(summary) = article.summary.as_mut() {
            *summary = shorten_summary(summary, max_chars);
        }
    }

    debug!(
        "Composed {} of {} articles (period {}, since {})",
        articles.len(),
        raw.len(),
        profile.period,
        since
    );
    articles
}

/// Source names present in a fetched list; the known-source list used to
/// reconcile preferences
pub fn known_sources(articles: &[Article]) -> BTreeSet<String> {
    articles.iter().map(|a| a.source.clone()).collect()
}
