//! Static feed adapter
//!
//! Reads the `latest.json` document published by the ingestion job.

pub mod client;
pub mod document;

pub use client::StaticFeedSource;
pub use document::{parse_feed_document, parse_timestamp};
