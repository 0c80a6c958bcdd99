use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}
