//! Preference profile domain entity
//!
//! The user-tunable display settings of the digest. Every field is a closed
//! domain: article count, time window and summary length are enums, so an
//! out-of-domain value cannot be represented once a profile exists. Raw
//! values coming from the UI or from storage enter through
//! [`PreferenceUpdate`] and are validated field by field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Maximum number of articles shown in a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MaxArticles {
    Ten,
    #[default]
    Thirty,
    Fifty,
}

impl MaxArticles {
    pub fn count(self) -> usize {
        match self {
            MaxArticles::Ten => 10,
            MaxArticles::Thirty => 30,
            MaxArticles::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for MaxArticles {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(MaxArticles::Ten),
            30 => Ok(MaxArticles::Thirty),
            50 => Ok(MaxArticles::Fifty),
            _ => Err(format!("Unsupported article count: {}", value)),
        }
    }
}

impl From<MaxArticles> for u32 {
    fn from(value: MaxArticles) -> Self {
        value.count() as u32
    }
}

/// Time window of the period filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    /// Since the start of the current calendar day
    #[serde(rename = "today")]
    Today,
    /// Last 72 hours
    #[default]
    #[serde(rename = "3days")]
    ThreeDays,
    /// Last 7 days
    #[serde(rename = "week")]
    Week,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Today => write!(f, "today"),
            Period::ThreeDays => write!(f, "3days"),
            Period::Week => write!(f, "week"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Period::Today),
            "3days" => Ok(Period::ThreeDays),
            "week" => Ok(Period::Week),
            _ => Err(format!("Unknown period: {}", s)),
        }
    }
}

/// Maximum summary length, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SummaryLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl SummaryLength {
    pub fn chars(self) -> usize {
        match self {
            SummaryLength::Short => 80,
            SummaryLength::Standard => 200,
            SummaryLength::Long => 400,
        }
    }
}

impl TryFrom<u32> for SummaryLength {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            80 => Ok(SummaryLength::Short),
            200 => Ok(SummaryLength::Standard),
            400 => Ok(SummaryLength::Long),
            _ => Err(format!("Unsupported summary length: {}", value)),
        }
    }
}

impl From<SummaryLength> for u32 {
    fn from(value: SummaryLength) -> Self {
        value.chars() as u32
    }
}

/// Ordered, case-sensitively unique keyword list
///
/// Order only matters for display. Matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Keywords(Vec<String>);

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Surrounding whitespace is trimmed; blank and duplicate
    /// entries are refused.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.contains(keyword) {
            return false;
        }
        self.0.push(keyword.to_string());
        true
    }

    /// Remove an exact (case-sensitive) match
    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|k| k != keyword);
        self.0.len() != before
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    /// True if any keyword is a case-insensitive substring of `text`
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.0.iter().any(|k| text.contains(&k.to_lowercase()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keywords = Keywords::new();
        for keyword in iter {
            keywords.insert(keyword.as_ref());
        }
        keywords
    }
}

impl From<Vec<String>> for Keywords {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Keywords> for Vec<String> {
    fn from(keywords: Keywords) -> Self {
        keywords.0
    }
}

/// The complete set of user display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub max_articles: MaxArticles,
    pub period: Period,
    pub summary_length: SummaryLength,
    /// Per-source on/off switch; a missing source counts as enabled
    #[serde(default)]
    pub enabled_sources: BTreeMap<String, bool>,
    #[serde(default)]
    pub keywords: Keywords,
}

impl PreferenceProfile {
    /// Only an explicit `false` disables a source
    pub fn is_source_enabled(&self, source: &str) -> bool {
        self.enabled_sources.get(source) != Some(&false)
    }

    /// Merge a partial update field by field into a new profile.
    ///
    /// Unspecified fields are kept. A field carrying an out-of-domain value
    /// is rejected and keeps its prior value.
    pub fn apply(&self, update: &PreferenceUpdate) -> PreferenceProfile {
        let mut next = self.clone();

        if let Some(raw) = update.max_articles {
            match MaxArticles::try_from(raw) {
                Ok(value) => next.max_articles = value,
                Err(e) => warn!("Rejected preference maxArticles: {}", e),
            }
        }

        if let Some(raw) = update.period.as_deref() {
            match raw.parse::<Period>() {
                Ok(value) => next.period = value,
                Err(e) => warn!("Rejected preference period: {}", e),
            }
        }

        if let Some(raw) = update.summary_length {
            match SummaryLength::try_from(raw) {
                Ok(value) => next.summary_length = value,
                Err(e) => warn!("Rejected preference summaryLength: {}", e),
            }
        }

        if let Some(sources) = &update.enabled_sources {
            next.enabled_sources = sources.clone();
        }

        if let Some(keywords) = &update.keywords {
            next.keywords = keywords.iter().collect();
        }

        next
    }
}

/// A partial preference change carrying raw, unvalidated values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_articles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_sources: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl PreferenceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_articles(mut self, value: u32) -> Self {
        self.max_articles = Some(value);
        self
    }

    pub fn with_period(mut self, value: impl Into<String>) -> Self {
        self.period = Some(value.into());
        self
    }

    pub fn with_summary_length(mut self, value: u32) -> Self {
        self.summary_length = Some(value);
        self
    }

    pub fn with_enabled_sources(mut self, sources: BTreeMap<String, bool>) -> Self {
        self.enabled_sources = Some(sources);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Build an update from a stored JSON document, keeping every field whose
    /// JSON type is usable and dropping the rest.
    ///
    /// Returns `None` when the document is not a JSON object.
    pub fn from_stored(doc: &Value) -> Option<Self> {
        let obj = doc.as_object()?;
        let mut update = PreferenceUpdate::new();

        for (key, value) in obj {
            match key.as_str() {
                "maxArticles" => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                    Some(n) => update.max_articles = Some(n),
                    None => warn!("Ignoring stored maxArticles: {}", value),
                },
                "period" => match value.as_str() {
                    Some(s) => update.period = Some(s.to_string()),
                    None => warn!("Ignoring stored period: {}", value),
                },
                "summaryLength" => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                    Some(n) => update.summary_length = Some(n),
                    None => warn!("Ignoring stored summaryLength: {}", value),
                },
                "enabledSources" => {
                    match serde_json::from_value::<BTreeMap<String, bool>>(value.clone()) {
                        Ok(map) => update.enabled_sources = Some(map),
                        Err(e) => warn!("Ignoring stored enabledSources: {}", e),
                    }
                }
                "keywords" => match serde_json::from_value::<Vec<String>>(value.clone()) {
                    Ok(list) => update.keywords = Some(list),
                    Err(e) => warn!("Ignoring stored keywords: {}", e),
                },
                _ => {}
            }
        }

        Some(update)
    }
}
