//! PostgreSQL adapter for SettingsRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::entities::Keywords;
use crate::domain::ports::{SettingsRepository, DEFAULT_SETTINGS_KEY};
use crate::entity::settings;
use crate::error::{ParseError, SourceError};

/// Keyword list stored in the `settings` row with key `"default"`
pub struct PostgresSettingsRepository {
    db: DatabaseConnection,
}

impl PostgresSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Extract `keywords` from a settings blob; a missing key is an empty list
pub(crate) fn keywords_from_value(value: &Value) -> Result<Vec<String>, ParseError> {
    match value.get("keywords") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list.clone()).map_err(|_| {
            ParseError::Shape(format!("settings.keywords must be a list of strings: {}", list))
        }),
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn load_keywords(&self) -> Result<Vec<String>, SourceError> {
        let row = settings::Entity::find_by_id(DEFAULT_SETTINGS_KEY.to_string())
            .one(&self.db)
            .await?;

        match row {
            Some(m) => Ok(keywords_from_value(&m.value)?),
            None => {
                debug!("No settings row '{}', using empty keywords", DEFAULT_SETTINGS_KEY);
                Ok(Vec::new())
            }
        }
    }

    async fn save_keywords(&self, keywords: &Keywords) -> Result<(), SourceError> {
        let now = Utc::now().fixed_offset();

        let model = settings::ActiveModel {
            key: Set(DEFAULT_SETTINGS_KEY.to_string()),
            value: Set(json!({ "keywords": keywords.as_slice() })),
            updated_at: Set(Some(now)),
        };

        settings::Entity::insert(model)
            .on_conflict(
                OnConflict::column(settings::Column::Key)
                    .update_columns([settings::Column::Value, settings::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        debug!("Saved {} keywords", keywords.len());
        Ok(())
    }
}
