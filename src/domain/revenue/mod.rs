//! Revenue module - scenario metrics engine and waterfall decomposer.
//!
//! Pure functions over immutable inputs: floorplan records, a scenario's
//! adjustment parameters, and an occupancy rate go in; aggregate revenue
//! metrics and attribution steps come out. Nothing in this module touches
//! storage or performs I/O.

mod adjustments;
mod concession;
mod metrics;
mod waterfall;

pub use adjustments::AdjustmentParameters;
pub use concession::ConcessionType;
pub use metrics::{apply_adjustment, compute_scenario_metrics, ScenarioResults};
pub use waterfall::{compute_waterfall, WaterfallStep, WaterfallStepType};
