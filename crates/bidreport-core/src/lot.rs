//! Lot records and the deviation computation

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// One evaluated lot: the administration's estimate against the winning bid.
///
/// Amounts are kept as [`Decimal`] so money columns survive formatting
/// without binary-float drift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotRecord {
    /// Free-form lot label
    pub name: String,
    /// Awarded bidder
    pub company: String,
    /// Administration's pre-bid cost estimate
    pub estimate: Decimal,
    /// Submitted financial offer
    pub bid: Decimal,
}

impl LotRecord {
    /// Create a new lot record
    pub fn new<S1, S2>(name: S1, company: S2, estimate: Decimal, bid: Decimal) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            name: name.into(),
            company: company.into(),
            estimate,
            bid,
        }
    }

    /// Deviation of the bid from the estimate, in percent.
    ///
    /// A non-positive estimate yields 0 instead of dividing by zero.
    pub fn deviation_percent(&self) -> Decimal {
        if self.estimate <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.bid - self.estimate) / self.estimate * Decimal::ONE_HUNDRED
    }

    /// Check that both money fields are non-negative.
    ///
    /// Free-form construction accepts any values; callers that sit on an
    /// input boundary run this before rendering.
    pub fn validate(&self) -> Result<()> {
        if self.estimate < Decimal::ZERO {
            return Err(Error::NegativeAmount {
                field: format!("estimate of {:?}", self.name),
                value: self.estimate,
            });
        }
        if self.bid < Decimal::ZERO {
            return Err(Error::NegativeAmount {
                field: format!("bid of {:?}", self.name),
                value: self.bid,
            });
        }
        Ok(())
    }

    /// The three default slots of the reference form.
    pub fn default_slots() -> Vec<LotRecord> {
        vec![
            LotRecord::new(
                "Lot 1",
                "CAP BON EMIHEM",
                Decimal::new(45_101_000, 3),
                Decimal::new(52_645_600, 3),
            ),
            LotRecord::new(
                "Lot 2",
                "CAP BON EMIHEM",
                Decimal::new(32_695_250, 3),
                Decimal::new(35_033_600, 3),
            ),
            LotRecord::new(
                "Lot 3",
                "EGBAT",
                Decimal::new(100_733_500, 3),
                Decimal::new(174_811_000, 3),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_deviation_matches_formula() {
        let lot = LotRecord::new("L", "C", Decimal::new(200, 0), Decimal::new(250, 0));
        assert_eq!(lot.deviation_percent(), Decimal::new(25, 0));
    }

    #[test]
    fn test_deviation_for_default_slots() {
        let lots = LotRecord::default_slots();
        let rounded: Vec<Decimal> = lots
            .iter()
            .map(|lot| lot.deviation_percent().round_dp(1))
            .collect();
        assert_eq!(
            rounded,
            vec![
                Decimal::new(167, 1),
                Decimal::new(72, 1),
                Decimal::new(735, 1),
            ]
        );
    }

    #[test]
    fn test_zero_estimate_is_guarded() {
        let lot = LotRecord::new("L", "C", Decimal::ZERO, Decimal::new(100, 0));
        assert_eq!(lot.deviation_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_bid_below_estimate_is_negative() {
        let lot = LotRecord::new("L", "C", Decimal::new(100, 0), Decimal::new(80, 0));
        assert_eq!(lot.deviation_percent(), Decimal::new(-20, 0));
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let lot = LotRecord::new("L", "C", Decimal::new(-1, 0), Decimal::ZERO);
        assert!(matches!(
            lot.validate(),
            Err(Error::NegativeAmount { .. })
        ));

        let lot = LotRecord::new("L", "C", Decimal::ZERO, Decimal::new(-1, 0));
        assert!(lot.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_zero() {
        let lot = LotRecord::new("L", "C", Decimal::ZERO, Decimal::ZERO);
        assert!(lot.validate().is_ok());
    }

    proptest! {
        #[test]
        fn non_positive_estimate_always_reports_zero(
            estimate in -1_000_000i64..=0i64,
            bid in 0i64..1_000_000i64,
        ) {
            let lot = LotRecord::new(
                "L",
                "C",
                Decimal::new(estimate, 2),
                Decimal::new(bid, 2),
            );
            prop_assert_eq!(lot.deviation_percent(), Decimal::ZERO);
        }

        #[test]
        fn deviation_sign_tracks_bid_vs_estimate(
            estimate in 1i64..1_000_000i64,
            bid in 0i64..1_000_000i64,
        ) {
            let lot = LotRecord::new(
                "L",
                "C",
                Decimal::new(estimate, 2),
                Decimal::new(bid, 2),
            );
            let deviation = lot.deviation_percent();
            prop_assert_eq!(deviation > Decimal::ZERO, bid > estimate);
            prop_assert_eq!(deviation < Decimal::ZERO, bid < estimate);
        }
    }
}
