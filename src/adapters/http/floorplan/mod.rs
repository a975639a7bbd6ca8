//! HTTP adapter for floorplan endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FloorplanHandlers;
pub use routes::floorplan_routes;
