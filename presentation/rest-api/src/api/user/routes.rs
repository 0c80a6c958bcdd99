use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{CreateUserRequest, UserResponse};

pub struct UserApi {
    create_use_case: Arc<dyn CreateUserUseCase>,
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
}

impl UserApi {
    pub fn new(
        create_use_case: Arc<dyn CreateUserUseCase>,
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

/// User registry API
///
/// JSON counterpart of the web form: list registered users and create new
/// ones.
#[OpenApi]
impl UserApi {
    /// List all registered users
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self) -> GetAllUsersResponse {
        match self.get_all_use_case.execute().await {
            Ok(users) => {
                let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
                GetAllUsersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUsersResponse::InternalError(json)
            }
        }
    }

    /// Register a new user
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn create_user(&self, body: Json<CreateUserRequest>) -> CreateUserResponse {
        let params = CreateUserParams {
            name: body.0.name,
            email: body.0.email,
        };

        match self.create_use_case.execute(params).await {
            Ok(user) => CreateUserResponse::Created(Json(user.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateUserResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
