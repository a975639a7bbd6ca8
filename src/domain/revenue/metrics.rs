//! Scenario metrics engine.
//!
//! Computes aggregate revenue metrics for one scenario: adjustments are
//! applied per floorplan, a concession turns gross rent into net effective
//! rent, and the results are accumulated into annualized totals.

use serde::{Deserialize, Serialize};

use crate::domain::property::Floorplan;

use super::AdjustmentParameters;

/// Aggregate revenue metrics for a scenario.
///
/// All four figures are rounded to 2 decimal places when the value is built;
/// no rounding happens during accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResults {
    /// Expected annual revenue across all floorplans.
    pub total_annual_revenue: f64,

    /// Average monthly rent per unit, derived from the annual total.
    pub avg_rent_per_unit: f64,

    /// Annual revenue per square foot of aggregate floor area.
    pub revenue_per_sqft: f64,

    /// Unit-count-weighted average of net effective monthly rents.
    ///
    /// Derived directly from monthly rents, unlike `avg_rent_per_unit` which
    /// divides the annual total by 12. The two can diverge under non-uniform
    /// occupancy weighting; both derivations are kept as-is.
    pub weighted_avg_rent: f64,
}

/// Applies a percentage and a dollar adjustment to a monthly amount.
///
/// The percentage scales the value first; the dollar adjustment is a flat
/// additive shift on the scaled value, never itself scaled.
pub fn apply_adjustment(value: f64, pct_adj: f64, dollar_adj: f64) -> f64 {
    value * (1.0 + pct_adj) + dollar_adj
}

/// Computes aggregate revenue metrics for a scenario.
///
/// For each floorplan independently: adjust base and amenity rent, sum to
/// gross rent, apply the concession, then annualize by unit count and
/// occupancy. An empty floorplan list yields an all-zero result via the
/// zero-denominator guards; no input validation is performed here.
pub fn compute_scenario_metrics(
    floorplans: &[Floorplan],
    params: &AdjustmentParameters,
    occupancy_rate: f64,
) -> ScenarioResults {
    let mut total_annual_revenue = 0.0;
    let mut total_units: u64 = 0;
    let mut total_sqft = 0.0;
    let mut weighted_rent_sum = 0.0;

    for floorplan in floorplans {
        let adjusted_base_rent = apply_adjustment(
            floorplan.base_rent(),
            params.base_rent_pct_adj,
            params.base_rent_dollar_adj,
        );
        let adjusted_amenity_rent = apply_adjustment(
            floorplan.amenity_rent(),
            params.amenity_rent_pct_adj,
            params.amenity_rent_dollar_adj,
        );

        let gross_rent = adjusted_base_rent + adjusted_amenity_rent;
        let net_effective_rent = params
            .concession_type
            .apply(gross_rent, params.concession_value);

        let unit_count = floorplan.unit_count();
        let annual_revenue = net_effective_rent * f64::from(unit_count) * occupancy_rate * 12.0;

        total_annual_revenue += annual_revenue;
        total_units += u64::from(unit_count);
        total_sqft += floorplan.square_footage() * f64::from(unit_count);
        weighted_rent_sum += net_effective_rent * f64::from(unit_count);
    }

    let avg_rent_per_unit = if total_units > 0 {
        total_annual_revenue / total_units as f64 / 12.0
    } else {
        0.0
    };
    let revenue_per_sqft = if total_sqft > 0.0 {
        total_annual_revenue / total_sqft
    } else {
        0.0
    };
    let weighted_avg_rent = if total_units > 0 {
        weighted_rent_sum / total_units as f64
    } else {
        0.0
    };

    ScenarioResults {
        total_annual_revenue: round_to_cents(total_annual_revenue),
        avg_rent_per_unit: round_to_cents(avg_rent_per_unit),
        revenue_per_sqft: round_to_cents(revenue_per_sqft),
        weighted_avg_rent: round_to_cents(weighted_avg_rent),
    }
}

/// Rounds a monetary figure to 2 decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
