use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};

pub struct CreateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateUserUseCase for CreateUserUseCaseImpl {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Registering user: {}", params.name));

        let user = User::new(NewUserProps {
            name: params.name,
            email: params.email,
        });

        self.repository.save(&user).await?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
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
    async fn should_persist_and_return_created_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_save()
            .withf(|user| user.name == "Jane" && user.email == "jane@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateUserParams {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.name, "Jane");
        assert_eq!(user.email, "jane@example.com");
        assert!(!user.id.is_nil());
    }

    #[tokio::test]
    async fn should_surface_repository_failure_on_register() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateUserParams {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UserError::Repository(_)));
    }
}
