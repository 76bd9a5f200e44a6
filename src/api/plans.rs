use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::models::{PlanPathway, SessionRecord, TrainingPlan, UserPreferences};
use crate::services::{PathwayService, PlanGenerationService, ProgressService};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub preferences: UserPreferences,
    pub stage: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct EvolvePlanRequest {
    pub current_plan: TrainingPlan,
    pub preferences: UserPreferences,
}

#[derive(Debug, Deserialize)]
pub struct PlanProgressRequest {
    pub plan: TrainingPlan,
    pub history: Vec<SessionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PathwaysRequest {
    pub plan: TrainingPlan,
}

pub fn plan_routes() -> Router {
    Router::new()
        .route("/generate", post(generate_plan))
        .route("/evolve", post(evolve_plan))
        .route("/progress", post(calculate_progress))
        .route("/pathways", post(generate_pathways))
}

/// Generate a fresh 4-week plan. The caller persists the result.
async fn generate_plan(
    WithRejection(Json(request), _): WithRejection<Json<GeneratePlanRequest>, ApiError>,
) -> Json<TrainingPlan> {
    let mut service = PlanGenerationService::new();
    let plan = service.create_personalized_plan(&request.preferences, request.stage.unwrap_or(1));
    Json(plan)
}

/// Generate the next-stage plan for an existing one.
async fn evolve_plan(
    WithRejection(Json(request), _): WithRejection<Json<EvolvePlanRequest>, ApiError>,
) -> Json<TrainingPlan> {
    let mut service = PlanGenerationService::new();
    let plan = service.create_evolution_plan(&request.current_plan, &request.preferences);
    Json(plan)
}

/// Recompute progress, status and (once) next pathways for a plan against its
/// session history.
async fn calculate_progress(
    WithRejection(Json(request), _): WithRejection<Json<PlanProgressRequest>, ApiError>,
) -> Json<TrainingPlan> {
    let service = ProgressService::new();
    let plan = service.calculate_plan_progress(&request.plan, &request.history);
    Json(plan)
}

async fn generate_pathways(
    WithRejection(Json(request), _): WithRejection<Json<PathwaysRequest>, ApiError>,
) -> Json<Vec<PlanPathway>> {
    let service = PathwayService::new();
    Json(service.generate_next_pathways(&request.plan))
}
