//! Occupancy rate value object (fraction of units assumed leased).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Expected physical occupancy as a fraction in [0, 1].
///
/// Scales potential (fully-leased) revenue down to expected revenue. Owned by
/// the analysis context; the revenue calculator receives the raw fraction and
/// performs no validation of its own.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupancyRate(f64);

impl OccupancyRate {
    /// Fully vacant.
    pub const EMPTY: Self = Self(0.0);

    /// Fully leased.
    pub const FULL: Self = Self(1.0);

    /// Typical pre-leasing assumption for student housing.
    pub const DEFAULT: Self = Self(0.95);

    /// Creates an occupancy rate, rejecting values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "occupancy_rate",
                format!("must be a fraction between 0 and 1, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for OccupancyRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for OccupancyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
