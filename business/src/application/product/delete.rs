use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Deleting an absent id is a no-op success, so no existence check.
        self.repository.delete_by_id(params.id).await?;

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::product::create::CreateProductUseCaseImpl;
    use crate::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use crate::application::product::update::UpdateProductUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductDetails};
    use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
    use crate::domain::product::use_cases::get_by_id::{
        GetProductByIdParams, GetProductByIdUseCase,
    };
    use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .withf(move |id| *id == product_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: product_id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_absent_product() {
        let mut mock_repo = MockProductRepo::new();
        // Repository treats an absent row as a successful no-op.
        mock_repo.expect_delete_by_id().returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_surface_repository_failure_on_delete() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    #[tokio::test]
    async fn should_not_find_product_after_delete() {
        // All mocks share one store, so the use cases see each other's
        // writes across a full create, fetch, update, delete sequence.
        let store: Arc<Mutex<Vec<Product>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock_repo = MockProductRepo::new();
        let save_store = store.clone();
        mock_repo.expect_save().returning(move |product| {
            let mut products = save_store.lock().unwrap();
            products.retain(|p| p.id != product.id);
            products.push(product.clone());
            Ok(())
        });
        let find_store = store.clone();
        mock_repo.expect_find_by_id().returning(move |id| {
            Ok(find_store.lock().unwrap().iter().find(|p| p.id == id).cloned())
        });
        let delete_store = store.clone();
        mock_repo.expect_delete_by_id().returning(move |id| {
            delete_store.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        });

        let repository: Arc<dyn ProductRepository> = Arc::new(mock_repo);

        let create = CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let get_by_id = GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let update = UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let delete = DeleteProductUseCaseImpl {
            repository,
            logger: mock_logger(),
        };

        let created = create
            .execute(CreateProductParams {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                price: 9.99,
            })
            .await
            .unwrap();

        let fetched = get_by_id
            .execute(GetProductByIdParams { id: created.id })
            .await
            .unwrap();
        assert_eq!(fetched, Some(created.clone()));

        let updated = update
            .execute(UpdateProductParams {
                id: created.id,
                details: ProductDetails {
                    name: "Widget2".to_string(),
                    description: "A widget".to_string(),
                    price: 12.5,
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Widget2");

        delete
            .execute(DeleteProductParams { id: created.id })
            .await
            .unwrap();

        let after_delete = get_by_id
            .execute(GetProductByIdParams { id: created.id })
            .await
            .unwrap();
        assert_eq!(after_delete, None);
    }
}
