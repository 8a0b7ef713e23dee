//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use crate::domain::entities::{Article, DigestResult};

/// Create an undated test article
pub fn test_article(source: &str, title: &str) -> Article {
    Article {
        source: source.to_string(),
        category: "news".to_string(),
        title: title.to_string(),
        url: format!(
            "https://{}.example/{}",
            source.to_lowercase().replace(' ', "-"),
            title.to_lowercase().replace(' ', "-")
        ),
        published_at: None,
        summary: Some(format!("Summary of {}", title)),
        image_url: None,
    }
}

/// Create a test article published at `published_at`
pub fn test_article_at(source: &str, title: &str, published_at: DateTime<Utc>) -> Article {
    Article {
        published_at: Some(published_at),
        ..test_article(source, title)
    }
}

/// Wrap articles in a result without a generation time
pub fn test_digest(articles: Vec<Article>) -> DigestResult {
    DigestResult {
        generated_at: None,
        articles,
    }
}

// ============================================================================
// Time zone with a skipped midnight
// ============================================================================

/// A zone at UTC-4 that springs forward to UTC-3 at local midnight on
/// 2022-09-11, so 00:00 to 01:00 that day never happens locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidnightGapZone;

impl MidnightGapZone {
    fn before() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    fn after() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn gap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 9, 11).unwrap()
    }
}

impl TimeZone for MidnightGapZone {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        MidnightGapZone
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let gap_start = Self::gap_day().and_time(NaiveTime::MIN);
        let gap_end = gap_start + chrono::Duration::hours(1);

        if *local < gap_start {
            LocalResult::Single(Self::before())
        } else if *local < gap_end {
            LocalResult::None
        } else {
            LocalResult::Single(Self::after())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        // Local midnight at UTC-4
        let transition = Self::gap_day().and_hms_opt(4, 0, 0).unwrap();
        if *utc < transition {
            Self::before()
        } else {
            Self::after()
        }
    }
}
