use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every JSON endpoint of the catalog API.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. "NotFound" or "ValidationError"
    pub name: String,
    /// Code-style message identifier, e.g. "product.not_found"
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Maps a domain error onto an HTTP status and a JSON error body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
