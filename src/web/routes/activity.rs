use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::services::activity_signup_service::{self, SignupError};
use crate::web::error::ApiError;

// Raw pairs so a repeated `email` resolves to its last value instead of a rejection.
type PairsQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name).map_err(|e| {
        // An undecodable name can never be a registry key.
        warn!("Rejected activity path: {}", e);
        ApiError::from(SignupError::ActivityNotFound)
    })
}

fn required_email(query: PairsQuery) -> Result<String, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        warn!("Rejected query string: {}", e);
        ApiError::InvalidQuery
    })?;
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or(ApiError::MissingQueryParam("email"))
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: PairsQuery,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = required_email(query)?;

    match activity_signup_service::sign_up(&registry, &activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "Signup failed: {}", e);
            Err(e.into())
        }
    }
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: PairsQuery,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = required_email(query)?;

    match activity_signup_service::unregister(&registry, &activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "Unregister failed: {}", e);
            Err(e.into())
        }
    }
}
