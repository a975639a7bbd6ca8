//! HTTP adapter for analysis endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
