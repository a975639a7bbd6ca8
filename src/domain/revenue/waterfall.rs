//! Waterfall decomposer.
//!
//! Attributes the total revenue delta between two scenarios to three causes
//! by re-running the metrics engine with partially-merged parameter sets.
//! The attribution order is fixed: base rent first, then amenity rent, then
//! concessions. Attribution is not symmetric under reordering, so the order
//! is part of the contract.

use serde::{Deserialize, Serialize};

use crate::domain::property::Floorplan;

use super::{compute_scenario_metrics, AdjustmentParameters};

/// Rendering hint for a waterfall step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterfallStepType {
    /// Absolute starting value.
    Base,
    /// Signed contribution relative to the previous step.
    Delta,
    /// Absolute ending value.
    Final,
}

impl WaterfallStepType {
    /// Returns the wire-format tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterfallStepType::Base => "base",
            WaterfallStepType::Delta => "delta",
            WaterfallStepType::Final => "final",
        }
    }
}

/// One step of the revenue attribution waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterfallStep {
    /// Display label; one of the five fixed step names.
    pub label: &'static str,

    /// Absolute revenue for `Base`/`Final` steps, a signed delta otherwise.
    pub value: f64,

    /// How a renderer should draw the bar.
    #[serde(rename = "type")]
    pub step_type: WaterfallStepType,
}

/// Decomposes the revenue delta between `baseline` and `comparison` into an
/// ordered five-step waterfall.
///
/// Parameter groups are switched from baseline to comparison values one at a
/// time (base rent, then amenity rent); the concession impact is the residual
/// that remains once every other field is at its comparison value. The five
/// steps always satisfy `baseline + deltas == final` up to the 2-decimal
/// rounding of the engine's totals.
pub fn compute_waterfall(
    floorplans: &[Floorplan],
    baseline: &AdjustmentParameters,
    comparison: &AdjustmentParameters,
    occupancy_rate: f64,
) -> Vec<WaterfallStep> {
    let baseline_results = compute_scenario_metrics(floorplans, baseline, occupancy_rate);
    let comparison_results = compute_scenario_metrics(floorplans, comparison, occupancy_rate);

    // Hold everything at baseline except the base-rent adjustments.
    let after_base_params = baseline
        .with_base_rent_adjustments(comparison.base_rent_pct_adj, comparison.base_rent_dollar_adj);
    let after_base = compute_scenario_metrics(floorplans, &after_base_params, occupancy_rate);
    let base_rent_impact = after_base.total_annual_revenue - baseline_results.total_annual_revenue;

    // Now also switch the amenity-rent adjustments; concession still baseline.
    let after_amenity_params = after_base_params.with_amenity_rent_adjustments(
        comparison.amenity_rent_pct_adj,
        comparison.amenity_rent_dollar_adj,
    );
    let after_amenity = compute_scenario_metrics(floorplans, &after_amenity_params, occupancy_rate);
    let amenity_rent_impact =
        after_amenity.total_annual_revenue - after_base.total_annual_revenue;

    // Residual: only the concession fields differ between after_amenity_params
    // and comparison, so this is the concession's contribution.
    let concession_impact =
        comparison_results.total_annual_revenue - after_amenity.total_annual_revenue;

    vec![
        WaterfallStep {
            label: "Baseline",
            value: baseline_results.total_annual_revenue,
            step_type: WaterfallStepType::Base,
        },
        WaterfallStep {
            label: "Base Rent Adj",
            value: base_rent_impact,
            step_type: WaterfallStepType::Delta,
        },
        WaterfallStep {
            label: "Amenity Rent Adj",
            value: amenity_rent_impact,
            step_type: WaterfallStepType::Delta,
        },
        WaterfallStep {
            label: "Concessions",
            value: concession_impact,
            step_type: WaterfallStepType::Delta,
        },
        WaterfallStep {
            label: "Final",
            value: comparison_results.total_annual_revenue,
            step_type: WaterfallStepType::Final,
        },
    ]
}
