//! HTTP adapter for property endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PropertyHandlers;
pub use routes::property_routes;
