use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Persistence port for products. Absence is a value, not an error:
/// `find_by_id` returns `Ok(None)` for an unknown identifier and
/// `delete_by_id` succeeds even when the row is already gone.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;
}
