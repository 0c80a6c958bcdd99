#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
