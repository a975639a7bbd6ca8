//! Scenario adjustment parameters.

use serde::{Deserialize, Serialize};

use super::ConcessionType;

/// Rent-adjustment and concession parameters applied uniformly across a
/// property's floorplans.
///
/// An immutable value object: the waterfall decomposer builds partially-merged
/// parameter sets via the `with_*` constructors, never by mutating a shared
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentParameters {
    /// Fractional base rent adjustment (0.05 = +5%). May be negative.
    #[serde(default)]
    pub base_rent_pct_adj: f64,

    /// Signed monthly dollar adjustment to base rent, applied after the
    /// percentage adjustment.
    #[serde(default)]
    pub base_rent_dollar_adj: f64,

    /// Fractional amenity rent adjustment.
    #[serde(default)]
    pub amenity_rent_pct_adj: f64,

    /// Signed monthly dollar adjustment to amenity rent.
    #[serde(default)]
    pub amenity_rent_dollar_adj: f64,

    /// Concession mechanism applied to gross rent.
    #[serde(default)]
    pub concession_type: ConcessionType,

    /// Concession magnitude; meaning depends on `concession_type`.
    #[serde(default)]
    pub concession_value: f64,
}

impl AdjustmentParameters {
    /// Parameters that leave every rent untouched.
    pub fn none() -> Self {
        Self::default()
    }

    /// Copy with the base-rent adjustment fields replaced.
    pub fn with_base_rent_adjustments(&self, pct_adj: f64, dollar_adj: f64) -> Self {
        Self {
            base_rent_pct_adj: pct_adj,
            base_rent_dollar_adj: dollar_adj,
            ..*self
        }
    }

    /// Copy with the amenity-rent adjustment fields replaced.
    pub fn with_amenity_rent_adjustments(&self, pct_adj: f64, dollar_adj: f64) -> Self {
        Self {
            amenity_rent_pct_adj: pct_adj,
            amenity_rent_dollar_adj: dollar_adj,
            ..*self
        }
    }

    /// Copy with the concession fields replaced.
    pub fn with_concession(&self, concession_type: ConcessionType, value: f64) -> Self {
        Self {
            concession_type,
            concession_value: value,
            ..*self
        }
    }
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            base_rent_pct_adj: 0.0,
            base_rent_dollar_adj: 0.0,
            amenity_rent_pct_adj: 0.0,
            amenity_rent_dollar_adj: 0.0,
            concession_type: ConcessionType::None,
            concession_value: 0.0,
        }
    }
}
