//! PostgreSQL adapter for ArticleSource

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{DatabaseConnection, EntityTrait, Order, QueryOrder, QuerySelect};
use tracing::info;

use crate::domain::entities::{Article, DigestResult};
use crate::domain::ports::ArticleSource;
use crate::entity::articles;
use crate::error::SourceError;

/// Number of most recent rows requested per fetch
pub const RECENT_ARTICLE_LIMIT: u64 = 100;

/// Query backend: most recent articles ordered by publication time
pub struct PostgresArticleSource {
    db: DatabaseConnection,
}

impl PostgresArticleSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Build a digest from rows already ordered newest first.
///
/// The generation time is the ingestion timestamp of the first row.
pub(crate) fn digest_from_rows(rows: Vec<articles::Model>) -> DigestResult {
    let generated_at = rows.first().map(|m| m.created_at.with_timezone(&Utc));
    DigestResult {
        generated_at,
        articles: rows.into_iter().map(Article::from).collect(),
    }
}

#[async_trait]
impl ArticleSource for PostgresArticleSource {
    async fn fetch(&self) -> Result<DigestResult, SourceError> {
        let rows = articles::Entity::find()
            .order_by_with_nulls(articles::Column::PublishedAt, Order::Desc, NullOrdering::Last)
            .limit(RECENT_ARTICLE_LIMIT)
            .all(&self.db)
            .await?;

        let result = digest_from_rows(rows);
        info!(
            "Query backend returned {} articles (generated at {:?})",
            result.articles.len(),
            result.generated_at
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "query-backend"
    }
}

impl From<articles::Model> for Article {
    fn from(m: articles::Model) -> Self {
        Self {
            source: m.source,
            category: m.category,
            title: m.title,
            url: m.url,
            published_at: m.published_at.map(|t| t.with_timezone(&Utc)),
            summary: m.summary,
            image_url: m.image_url,
        }
    }
}
