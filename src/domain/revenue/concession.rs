//! Concession types and their application to gross rent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rent discount mechanism applied after gross rent is computed.
///
/// The variant set is closed; adding a new concession kind is a compile-time
/// decision point for every match over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcessionType {
    /// No concession.
    #[default]
    None,
    /// Fraction off gross rent (0.10 = 10% off).
    Percentage,
    /// Flat dollar amount off per month.
    Dollar,
    /// Free months spread over a 12-month term.
    FreeMonths,
}

impl ConcessionType {
    /// Parses a wire-format concession type.
    ///
    /// Unrecognized values map to `None` rather than failing: the API accepts
    /// arbitrary strings here and treats anything unknown as "no concession".
    pub fn parse(s: &str) -> Self {
        match s {
            "percentage" => ConcessionType::Percentage,
            "dollar" => ConcessionType::Dollar,
            "free_months" => ConcessionType::FreeMonths,
            _ => ConcessionType::None,
        }
    }

    /// Returns the wire-format label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcessionType::None => "none",
            ConcessionType::Percentage => "percentage",
            ConcessionType::Dollar => "dollar",
            ConcessionType::FreeMonths => "free_months",
        }
    }

    /// Applies this concession to a gross monthly rent, yielding the net
    /// effective monthly rent.
    ///
    /// The meaning of `value` depends on the variant: a fraction for
    /// `Percentage`, a monthly dollar amount for `Dollar`, and a number of
    /// free months for `FreeMonths`. The `FreeMonths` formula assumes a
    /// 12-month lease term; the denominator is fixed at 12 and must be
    /// revisited if other term lengths are ever modeled.
    pub fn apply(&self, gross_rent: f64, value: f64) -> f64 {
        match self {
            ConcessionType::Percentage => gross_rent * (1.0 - value),
            // Floors at zero: a concession larger than the rent cannot
            // produce negative revenue.
            ConcessionType::Dollar => (gross_rent - value).max(0.0),
            ConcessionType::FreeMonths => {
                let months_paid = 12.0 - value;
                gross_rent * (months_paid / 12.0)
            }
            ConcessionType::None => gross_rent,
        }
    }
}

impl fmt::Display for ConcessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_concession_takes_fraction_off() {
        let net = ConcessionType::Percentage.apply(1000.0, 0.10);
        assert!((net - 900.0).abs() < 1e-9);
    }

    #[test]
    fn dollar_concession_subtracts_flat_amount() {
        let net = ConcessionType::Dollar.apply(1000.0, 150.0);
        assert!((net - 850.0).abs() < 1e-9);
    }

    #[test]
    fn dollar_concession_floors_at_zero() {
        let net = ConcessionType::Dollar.apply(1000.0, 1500.0);
        assert_eq!(net, 0.0);
    }

    #[test]
    fn free_months_spreads_over_twelve_month_term() {
        // One month free on 1250 leaves 11/12 of the rent.
        let net = ConcessionType::FreeMonths.apply(1250.0, 1.0);
        assert!((net - 1145.8333333333333).abs() < 1e-9);
    }

    #[test]
    fn none_leaves_gross_rent_unchanged() {
        assert_eq!(ConcessionType::None.apply(1234.56, 99.0), 1234.56);
    }

    #[test]
    fn parse_recognizes_known_types() {
        assert_eq!(ConcessionType::parse("percentage"), ConcessionType::Percentage);
        assert_eq!(ConcessionType::parse("dollar"), ConcessionType::Dollar);
        assert_eq!(ConcessionType::parse("free_months"), ConcessionType::FreeMonths);
        assert_eq!(ConcessionType::parse("none"), ConcessionType::None);
    }

    #[test]
    fn parse_treats_unknown_types_as_none() {
        assert_eq!(ConcessionType::parse("half_off"), ConcessionType::None);
        assert_eq!(ConcessionType::parse(""), ConcessionType::None);
    }

    #[test]
    fn serde_uses_snake_case_labels() {
        let json = serde_json::to_string(&ConcessionType::FreeMonths).unwrap();
        assert_eq!(json, "\"free_months\"");
        let parsed: ConcessionType = serde_json::from_str("\"dollar\"").unwrap();
        assert_eq!(parsed, ConcessionType::Dollar);
    }

    #[test]
    fn as_str_roundtrips_through_parse() {
        for ty in [
            ConcessionType::None,
            ConcessionType::Percentage,
            ConcessionType::Dollar,
            ConcessionType::FreeMonths,
        ] {
            assert_eq!(ConcessionType::parse(ty.as_str()), ty);
        }
    }

    proptest! {
        // A positive concession never raises net effective rent above gross,
        // and the dollar concession never drives it negative.
        #[test]
        fn concessions_never_increase_rent(
            gross in 0.0..10_000.0f64,
            value in 0.0..1.0f64,
        ) {
            let pct = ConcessionType::Percentage.apply(gross, value);
            prop_assert!(pct <= gross + 1e-9);

            let dollar = ConcessionType::Dollar.apply(gross, value * 5_000.0);
            prop_assert!(dollar <= gross + 1e-9);
            prop_assert!(dollar >= 0.0);

            let free = ConcessionType::FreeMonths.apply(gross, value * 12.0);
            prop_assert!(free <= gross + 1e-9);
        }
    }
}
