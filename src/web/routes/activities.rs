use axum::{extract::State, Json};

use crate::database::ActivityRegistry;
use crate::models::ActivityListing;
use crate::services::activity_signup_service;

pub async fn activities_handler(State(registry): State<ActivityRegistry>) -> Json<ActivityListing> {
    Json(activity_signup_service::list_activities(&registry))
}
