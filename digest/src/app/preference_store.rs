//! Preference store
//!
//! Owns the current preference profile and persists it to local key-value
//! storage. The profile is replaced as a whole on every update and written
//! before `update` returns. Storage and parse failures never reach the
//! caller; they degrade to defaults with a log record.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{PreferenceProfile, PreferenceUpdate};
use crate::domain::ports::{KeyValueStore, PREFERENCES_KEY};
use crate::error::PersistenceError;

/// Merge the stored source switches with the known-source list.
///
/// Every known source missing from `enabled` is added as enabled. Entries
/// for sources that are not currently known are kept so their setting
/// survives until they reappear.
pub fn reconcile_sources<I, N>(
    enabled: &BTreeMap<String, bool>,
    known: I,
) -> BTreeMap<String, bool>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut merged = enabled.clone();
    for name in known {
        merged.entry(name.as_ref().to_string()).or_insert(true);
    }
    merged
}

pub struct PreferenceStore<S: KeyValueStore> {
    store: Arc<S>,
    current: PreferenceProfile,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a store holding the default profile; call `load` to read
    /// persisted state
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            current: PreferenceProfile::default(),
        }
    }

    /// The last loaded or updated profile
    pub fn current(&self) -> &PreferenceProfile {
        &self.current
    }

    /// Read the persisted profile and reconcile it against `known_sources`
    pub fn load<I, N>(&mut self, known_sources: I) -> PreferenceProfile
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut profile = self.read_stored();
        profile.enabled_sources = reconcile_sources(&profile.enabled_sources, known_sources);

        self.current = profile.clone();
        profile
    }

    /// Merge `partial` onto the current profile, persist the result and
    /// make it current
    pub fn update(&mut self, partial: &PreferenceUpdate) -> PreferenceProfile {
        let next = self.current.apply(partial);

        if let Err(e) = self.persist(&next) {
            warn!("Failed to persist preferences: {}", e);
        }

        self.current = next.clone();
        next
    }

    /// Drop the persisted profile and fall back to defaults
    pub fn clear(&mut self) -> PreferenceProfile {
        if let Err(e) = self.store.remove(PREFERENCES_KEY) {
            warn!("Failed to clear preferences: {}", e);
        }
        self.current = PreferenceProfile::default();
        self.current.clone()
    }

    fn read_stored(&self) -> PreferenceProfile {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored preferences, using defaults");
                return PreferenceProfile::default();
            }
            Err(e) => {
                warn!("Failed to read preferences, using defaults: {}", e);
                return PreferenceProfile::default();
            }
        };

        let doc = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Stored preferences are not valid JSON, using defaults: {}", e);
                return PreferenceProfile::default();
            }
        };

        match PreferenceUpdate::from_stored(&doc) {
            Some(update) => PreferenceProfile::default().apply(&update),
            None => {
                warn!("Stored preferences are not an object, using defaults");
                PreferenceProfile::default()
            }
        }
    }

    fn persist(&self, profile: &PreferenceProfile) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PREFERENCES_KEY, &json)
    }
}
