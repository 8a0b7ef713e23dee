//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod article_source;
pub mod key_value;
pub mod settings;

pub use article_source::ArticleSource;
pub use key_value::{KeyValueStore, PREFERENCES_KEY};
pub use settings::{SettingsRepository, DEFAULT_SETTINGS_KEY};
