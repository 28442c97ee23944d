use demo_data::Repository;
use demo_data_sqlx::SqlxRepository;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{CreateItemRequest, Item};

#[derive(Clone)]
pub struct ItemService {
    repo: SqlxRepository<Item>,
}

impl ItemService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Item, ApiError> {
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Item not found".into()))
    }

    pub async fn create(&self, req: CreateItemRequest) -> Result<Item, ApiError> {
        let item = self.repo.create(&req).await?;
        info!(id = item.id, "Item created");
        Ok(item)
    }
}
