//! SeaORM implementation of PublisherRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{DomainError, PublisherRepository};
use crate::models::publisher::{self, Entity as PublisherEntity};

/// SeaORM-based implementation of PublisherRepository
pub struct SeaOrmPublisherRepository {
    db: DatabaseConnection,
}

impl SeaOrmPublisherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PublisherRepository for SeaOrmPublisherRepository {
    async fn find_all(&self) -> Result<Vec<publisher::Model>, DomainError> {
        Ok(PublisherEntity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<publisher::Model>, DomainError> {
        Ok(PublisherEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(
        &self,
        mut publisher: publisher::ActiveModel,
    ) -> Result<publisher::Model, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        publisher.created_at = Set(now.clone());
        publisher.updated_at = Set(now);

        Ok(publisher.insert(&self.db).await?)
    }
}
