use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

/// Persistence port for users. The web form only lists and creates, so the
/// port stays that narrow.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
