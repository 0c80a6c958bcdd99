use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user, created from a form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(props: NewUserProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            email: props.email,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(
        id: Uuid,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}
