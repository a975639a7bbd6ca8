//! Analysis module - analyses and their rent scenarios.

mod analysis;
mod errors;
mod scenario;

pub use analysis::Analysis;
pub use errors::{AnalysisError, ScenarioError};
pub use scenario::Scenario;
