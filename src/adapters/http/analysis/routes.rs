//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_analysis, duplicate_analysis, get_analysis, list_analyses, AnalysisHandlers,
};

/// Creates the analysis router with all endpoints.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/", get(list_analyses))
        .route("/", post(create_analysis))
        .route("/:id", get(get_analysis))
        .route("/:id/duplicate", post(duplicate_analysis))
        .with_state(handlers)
}
