use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::services::activity_signup_service::SignupError;

#[derive(Debug)]
pub enum ApiError {
    Signup(SignupError),
    MissingQueryParam(&'static str),
    InvalidQuery,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Signup(SignupError::AlreadySignedUp) => StatusCode::BAD_REQUEST,
            ApiError::Signup(SignupError::ActivityNotFound | SignupError::NotSignedUp) => {
                StatusCode::NOT_FOUND
            }
            ApiError::MissingQueryParam(_) | ApiError::InvalidQuery => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Signup(e) => e.to_string(),
            ApiError::MissingQueryParam(name) => {
                format!("Missing required query parameter: {}", name)
            }
            ApiError::InvalidQuery => "Malformed query string".to_string(),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(e: SignupError) -> Self {
        ApiError::Signup(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.detail() })),
        )
            .into_response()
    }
}
