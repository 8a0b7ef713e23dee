//! Application layer
//!
//! Services that combine the domain model with the ports: composing the
//! digest, holding preferences and guarding fetches against stale results.

pub mod composer;
pub mod digest_service;
pub mod keyword_service;
pub mod preference_store;

pub use composer::{compose, cutoff, known_sources, shorten_summary};
pub use digest_service::{DigestService, DigestView, FetchTicket};
pub use keyword_service::KeywordService;
pub use preference_store::{reconcile_sources, PreferenceStore};
