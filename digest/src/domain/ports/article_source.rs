//! Article source port
//!
//! The data-acquisition boundary. Exactly two implementations exist: the
//! static feed (`latest.json`) and the authenticated query backend. Which
//! one is used is decided once, when the source is built from config.

use async_trait::async_trait;

use crate::domain::entities::DigestResult;
use crate::error::SourceError;

/// Produces the raw article list plus its generation timestamp
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the current article list
    async fn fetch(&self) -> Result<DigestResult, SourceError>;

    /// Short label used in log records
    fn name(&self) -> &'static str;
}
