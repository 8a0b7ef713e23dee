//! Keyword sync with the query backend
//!
//! The backend's settings row holds the authoritative keyword list. `pull`
//! copies it into the local profile; `push` writes the local list back.

use std::sync::Arc;

use tracing::{info, warn};

use super::preference_store::PreferenceStore;
use crate::domain::entities::{PreferenceProfile, PreferenceUpdate};
use crate::domain::ports::{KeyValueStore, SettingsRepository};
use crate::error::SourceError;

pub struct KeywordService<R: SettingsRepository> {
    repo: Arc<R>,
}

impl<R: SettingsRepository> KeywordService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Replace the local keyword list with the remote one.
    ///
    /// On failure the profile is left untouched and returned as is.
    pub async fn pull<S: KeyValueStore>(
        &self,
        store: &mut PreferenceStore<S>,
    ) -> PreferenceProfile {
        match self.repo.load_keywords().await {
            Ok(keywords) => {
                info!("Loaded {} remote keywords", keywords.len());
                store.update(&PreferenceUpdate::new().with_keywords(keywords))
            }
            Err(e) => {
                warn!("Failed to load remote keywords: {}", e);
                store.current().clone()
            }
        }
    }

    /// Save the profile's keyword list remotely
    pub async fn push(&self, profile: &PreferenceProfile) -> Result<(), SourceError> {
        self.repo.save_keywords(&profile.keywords).await?;
        info!("Saved {} keywords", profile.keywords.len());
        Ok(())
    }
}
