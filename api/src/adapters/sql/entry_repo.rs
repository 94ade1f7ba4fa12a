//! SeaORM adapter for EntryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Entry, EntryId, NewEntry, Sentiment};
use crate::domain::ports::EntryRepository;
use crate::entity::entries;
use crate::error::DomainError;

/// SQL implementation of EntryRepository (PostgreSQL in production)
pub struct SqlEntryRepository {
    db: DatabaseConnection,
}

impl SqlEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for SqlEntryRepository {
    async fn create(&self, entry: &NewEntry) -> Result<Entry, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = entries::ActiveModel {
            id: Set(id),
            title: Set(Some(entry.title.clone())),
            content: Set(Some(entry.content.clone())),
            sentiment: Set(Some(entry.sentiment.to_string())),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Entry::try_from(result)
    }

    async fn list_all(&self) -> Result<Vec<Entry>, DomainError> {
        // Ids are random, so rows sharing a timestamp have no defined order
        let results = entries::Entity::find()
            .order_by_asc(entries::Column::CreatedAt)
            .order_by_asc(entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Entry::try_from).collect()
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, DomainError> {
        let result = entries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Entry::try_from).transpose()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        entries::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert a stored row to a domain entity, rejecting rows that lack a field
impl TryFrom<entries::Model> for Entry {
    type Error = DomainError;

    fn try_from(model: entries::Model) -> Result<Self, Self::Error> {
        let missing = |field: &str| {
            DomainError::Deserialization(format!("entry {} has no {}", model.id, field))
        };

        let title = model.title.ok_or_else(|| missing("title"))?;
        let content = model.content.ok_or_else(|| missing("content"))?;
        let sentiment: Sentiment = model
            .sentiment
            .as_deref()
            .ok_or_else(|| missing("sentiment"))?
            .parse()
            .map_err(|e: String| {
                DomainError::Deserialization(format!("entry {}: {}", model.id, e))
            })?;
        let created_at = model
            .created_at
            .ok_or_else(|| missing("created_at"))?
            .with_timezone(&Utc);

        Ok(Entry {
            id: EntryId(model.id),
            title,
            content,
            sentiment,
            created_at,
        })
    }
}
