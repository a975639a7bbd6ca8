//! Analysis command and query handlers.

mod create_analysis;
mod duplicate_analysis;
mod get_analysis;
mod list_analyses;

pub use create_analysis::{CreateAnalysisCommand, CreateAnalysisHandler};
pub use duplicate_analysis::{DuplicateAnalysisCommand, DuplicateAnalysisHandler};
pub use get_analysis::{AnalysisDetails, GetAnalysisHandler, GetAnalysisQuery};
pub use list_analyses::ListAnalysesHandler;
