use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct CreateUserRequest {
    /// User name
    pub name: String,
    /// User email address
    pub email: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User unique identifier
    pub id: String,
    /// User name
    pub name: String,
    /// User email address
    pub email: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
