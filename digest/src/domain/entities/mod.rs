//! Domain entities
//!
//! Pure domain models for the digest: fetched articles and the user's
//! preference profile. These are separate from the SeaORM entities in the
//! `entity` module.

pub mod article;
pub mod preferences;

pub use article::{Article, DigestResult};
pub use preferences::{
    Keywords, MaxArticles, Period, PreferenceProfile, PreferenceUpdate, SummaryLength,
};
