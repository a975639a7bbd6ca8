//! HTTP routes for floorplan endpoints.

use axum::{
    routing::{delete, post, put},
    Router,
};

use super::handlers::{create_floorplan, delete_floorplan, update_floorplan, FloorplanHandlers};

/// Creates the floorplan router with all endpoints.
pub fn floorplan_routes(handlers: FloorplanHandlers) -> Router {
    Router::new()
        .route("/", post(create_floorplan))
        .route("/:id", put(update_floorplan))
        .route("/:id", delete(delete_floorplan))
        .with_state(handlers)
}
