use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::models::{Routine, UserPreferences};
use crate::services::RoutineService;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateRoutineRequest {
    pub preferences: UserPreferences,
}

pub fn routine_routes() -> Router {
    Router::new().route("/generate", post(generate_routine))
}

/// Build a single-session routine for immediate practice. Not persisted.
async fn generate_routine(
    WithRejection(Json(request), _): WithRejection<Json<GenerateRoutineRequest>, ApiError>,
) -> Json<Routine> {
    let service = RoutineService::new();
    Json(service.generate_routine(&request.preferences))
}
