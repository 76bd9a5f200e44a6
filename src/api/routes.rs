use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::plans::plan_routes;
use super::routines::routine_routes;

pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/plans", plan_routes())
        .nest("/api/routines", routine_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
