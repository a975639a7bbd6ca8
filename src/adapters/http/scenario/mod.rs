//! HTTP adapter for scenario endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScenarioHandlers;
pub use routes::scenario_routes;
