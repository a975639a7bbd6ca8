//! HTTP routes for property endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_property, get_property, list_properties, PropertyHandlers};

/// Creates the property router with all endpoints.
pub fn property_routes(handlers: PropertyHandlers) -> Router {
    Router::new()
        .route("/", get(list_properties))
        .route("/", post(create_property))
        .route("/:id", get(get_property))
        .with_state(handlers)
}
