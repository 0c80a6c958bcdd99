use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.description, self.price)
    }
}
