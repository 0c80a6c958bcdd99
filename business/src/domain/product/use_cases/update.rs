use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};

pub struct UpdateProductParams {
    pub id: Uuid,
    pub details: ProductDetails,
}

/// Merge `details` onto the product with `id`. Fails with
/// `ProductError::NotFound` when no such product exists.
#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
