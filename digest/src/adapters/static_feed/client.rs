//! Static feed source over HTTP

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::document::parse_feed_document;
use crate::domain::entities::DigestResult;
use crate::domain::ports::ArticleSource;
use crate::error::{FetchError, SourceError};

/// Fetches `<base>/latest.json`
pub struct StaticFeedSource {
    http: Client,
    base_url: String,
}

impl StaticFeedSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured HTTP client (proxy, default headers)
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn feed_url(&self) -> String {
        format!("{}/latest.json", self.base_url)
    }

    async fn get_body(&self) -> Result<String, FetchError> {
        let url = self.feed_url();
        debug!("Fetching static feed {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(FetchError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FetchError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ArticleSource for StaticFeedSource {
    async fn fetch(&self) -> Result<DigestResult, SourceError> {
        let body = self.get_body().await?;
        let result = parse_feed_document(&body)?;

        info!(
            "Static feed returned {} articles (generated at {:?})",
            result.articles.len(),
            result.generated_at
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "static-feed"
    }
}
