//! Remote settings port
//!
//! The query backend keeps the keyword list in a settings row keyed by a
//! fixed identifier. This port abstracts that row.

use async_trait::async_trait;

use crate::domain::entities::Keywords;
use crate::error::SourceError;

/// Key of the settings row shared by the client
pub const DEFAULT_SETTINGS_KEY: &str = "default";

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the stored keyword list (empty when the row has none)
    async fn load_keywords(&self) -> Result<Vec<String>, SourceError>;

    /// Replace the stored keyword list and bump the row's update timestamp
    async fn save_keywords(&self, keywords: &Keywords) -> Result<(), SourceError>;
}
