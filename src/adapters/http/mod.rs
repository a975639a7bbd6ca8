//! HTTP adapters - REST API surface.
//!
//! One submodule per resource, each with its DTOs, axum handlers, and route
//! table. `api_router` assembles the `/api` surface; the composition root
//! adds CORS, tracing, timeout, and static-file layers around it.

pub mod analysis;
pub mod error;
pub mod floorplan;
pub mod property;
pub mod scenario;

use axum::{routing::get, Json, Router};
use serde_json::json;

pub use analysis::AnalysisHandlers;
pub use error::ErrorResponse;
pub use floorplan::FloorplanHandlers;
pub use property::PropertyHandlers;
pub use scenario::ScenarioHandlers;

/// Assembles the full `/api` router.
pub fn api_router(
    property_handlers: PropertyHandlers,
    floorplan_handlers: FloorplanHandlers,
    analysis_handlers: AnalysisHandlers,
    scenario_handlers: ScenarioHandlers,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/properties", property::property_routes(property_handlers))
        .nest("/floorplans", floorplan::floorplan_routes(floorplan_handlers))
        .nest("/analyses", analysis::analysis_routes(analysis_handlers))
        .nest("/scenarios", scenario::scenario_routes(scenario_handlers))
}

/// GET /api/health - Liveness probe.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
