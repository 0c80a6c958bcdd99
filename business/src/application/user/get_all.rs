use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::GetAllUsersUseCase;

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<User>, UserError> {
        self.logger.info("Fetching all users");
        let users = self.repository.get_all().await?;
        self.logger.info(&format!("Found {} users", users.len()));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::user::create::CreateUserUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

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
    async fn should_return_all_users_when_requested() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![User::from_repository(
                Uuid::new_v4(),
                "Jane".to_string(),
                "jane@example.com".to_string(),
                Utc::now(),
            )])
        });

        let use_case = GetAllUsersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let users = result.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "jane@example.com");
    }

    #[tokio::test]
    async fn should_list_user_after_registration() {
        // Both mocks share one store, so a registered user shows up in the
        // next listing, like a form submission followed by a page load.
        let store: Arc<Mutex<Vec<User>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock_repo = MockUserRepo::new();
        let save_store = store.clone();
        mock_repo.expect_save().returning(move |user| {
            save_store.lock().unwrap().push(user.clone());
            Ok(())
        });
        let list_store = store.clone();
        mock_repo
            .expect_get_all()
            .returning(move || Ok(list_store.lock().unwrap().clone()));

        let repository: Arc<dyn UserRepository> = Arc::new(mock_repo);

        let create = CreateUserUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let list = GetAllUsersUseCaseImpl {
            repository,
            logger: mock_logger(),
        };

        let created = create
            .execute(CreateUserParams {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            })
            .await
            .unwrap();

        let users = list.execute().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, created.id);
        assert_eq!(users[0].name, "Jane");
    }
}
