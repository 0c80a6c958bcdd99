use uuid::Uuid;

/// A catalog entry. The identifier is assigned at construction and never
/// changes afterwards; updates merge the remaining fields onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(id: Uuid, name: String, description: String, price: f64) -> Self {
        Self {
            id,
            name,
            description,
            price,
        }
    }

    /// Copies the mutable fields from `details` onto this record, keeping
    /// the identifier intact.
    pub fn merge_details(&self, details: &ProductDetails) -> Self {
        Self {
            id: self.id,
            name: details.name.clone(),
            description: details.description.clone(),
            price: details.price,
        }
    }
}

/// The fields an update is allowed to touch.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_identifier_on_construction() {
        let product = Product::new(NewProductProps {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
        });

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn should_keep_identifier_when_merging_details() {
        let product = Product::new(NewProductProps {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
        });

        let merged = product.merge_details(&ProductDetails {
            name: "Widget2".to_string(),
            description: "A widget".to_string(),
            price: 12.5,
        });

        assert_eq!(merged.id, product.id);
        assert_eq!(merged.name, "Widget2");
        assert_eq!(merged.price, 12.5);
    }
}
