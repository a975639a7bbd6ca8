//! HTTP routes for scenario endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    calculate_scenario, create_scenario, get_waterfall, update_scenario, ScenarioHandlers,
};

/// Creates the scenario router with all endpoints.
pub fn scenario_routes(handlers: ScenarioHandlers) -> Router {
    Router::new()
        .route("/", post(create_scenario))
        .route("/:id", put(update_scenario))
        .route("/:id/calculate", get(calculate_scenario))
        .route("/:id/waterfall", get(get_waterfall))
        .with_state(handlers)
}
