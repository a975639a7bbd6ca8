//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier, timestamp, and error types that form the
//! vocabulary of the Rentsense domain.

mod errors;
mod ids;
mod occupancy;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnalysisId, FloorplanId, PropertyId, ScenarioId};
pub use occupancy::OccupancyRate;
pub use timestamp::Timestamp;
