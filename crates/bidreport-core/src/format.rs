//! Display formatting for money and percentage columns

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

/// Sign display policy for formatted numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignDisplay {
    /// Minus sign for negative values only
    #[default]
    Negative,
    /// Explicit sign for zero and positive values too
    Always,
}

/// Fixed-decimal number format with optional thousands separators.
///
/// The money columns use `#,##0.000`; the deviation column uses one
/// fractional digit with a configurable sign policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Fractional digits, always padded to this many
    pub decimals: u32,
    /// Insert `,` every three integer digits
    pub thousands: bool,
    /// Sign policy
    pub sign: SignDisplay,
}

impl NumberFormat {
    /// Money column format (`#,##0.000`)
    pub fn money() -> Self {
        Self {
            decimals: 3,
            thousands: true,
            sign: SignDisplay::Negative,
        }
    }

    /// Deviation column format: one fractional digit, no grouping
    pub fn percent(sign: SignDisplay) -> Self {
        Self {
            decimals: 1,
            thousands: false,
            sign,
        }
    }

    /// Format a value according to this format.
    ///
    /// Values that round to zero never carry a minus sign.
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value
            .round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded < Decimal::ZERO;
        let magnitude = rounded.abs().to_string();

        let (int_part, frac_part) = match magnitude.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (magnitude.as_str(), ""),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        } else if self.sign == SignDisplay::Always {
            out.push('+');
        }

        if self.thousands {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }

        if self.decimals > 0 {
            out.push('.');
            let keep = frac_part.len().min(self.decimals as usize);
            out.push_str(&frac_part[..keep]);
            for _ in keep..self.decimals as usize {
                out.push('0');
            }
        }

        out
    }
}

/// Parse a decimal amount from free-form text.
///
/// Whitespace and grouping commas are tolerated; anything else that is
/// not a finite decimal is rejected.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| Error::InvalidNumericInput {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Insert `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_money_format() {
        let money = NumberFormat::money();
        assert_eq!(money.format(Decimal::new(52_645_600, 3)), "52,645.600");
        assert_eq!(money.format(Decimal::new(45_101_000, 3)), "45,101.000");
        assert_eq!(money.format(Decimal::new(1_234_567_5, 1)), "1,234,567.500");
        assert_eq!(money.format(Decimal::ZERO), "0.000");
    }

    #[test]
    fn test_money_format_pads_short_fractions() {
        let money = NumberFormat::money();
        assert_eq!(money.format(Decimal::new(5, 0)), "5.000");
        assert_eq!(money.format(Decimal::new(51, 1)), "5.100");
    }

    #[test]
    fn test_money_format_rounds_long_fractions() {
        let money = NumberFormat::money();
        assert_eq!(money.format(Decimal::new(1_23456, 5)), "1.235");
    }

    #[test]
    fn test_percent_signed() {
        let percent = NumberFormat::percent(SignDisplay::Always);
        assert_eq!(percent.format(Decimal::new(167, 1)), "+16.7");
        assert_eq!(percent.format(Decimal::new(-52, 1)), "-5.2");
        assert_eq!(percent.format(Decimal::ZERO), "+0.0");
    }

    #[test]
    fn test_percent_unsigned() {
        let percent = NumberFormat::percent(SignDisplay::Negative);
        assert_eq!(percent.format(Decimal::new(167, 1)), "16.7");
        assert_eq!(percent.format(Decimal::new(-52, 1)), "-5.2");
        assert_eq!(percent.format(Decimal::ZERO), "0.0");
    }

    #[test]
    fn test_negative_that_rounds_to_zero_loses_its_sign() {
        let percent = NumberFormat::percent(SignDisplay::Always);
        assert_eq!(percent.format(Decimal::new(-4, 2)), "+0.0");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("estimate", "45,101.5").unwrap(),
            Decimal::new(45_101_5, 1)
        );
        assert_eq!(parse_amount("bid", " 12 ").unwrap(), Decimal::new(12, 0));
        assert!(matches!(
            parse_amount("bid", "abc"),
            Err(Error::InvalidNumericInput { .. })
        ));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    proptest! {
        #[test]
        fn money_always_has_three_fraction_digits(
            units in -1_000_000_000_000i64..1_000_000_000_000i64,
            scale in 0u32..6,
        ) {
            let text = NumberFormat::money().format(Decimal::new(units, scale));
            let frac = text.split('.').nth(1).expect("money format has a fraction");
            prop_assert_eq!(frac.len(), 3);
            prop_assert!(frac.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn signed_percent_always_leads_with_a_sign(
            units in -1_000_000i64..1_000_000i64,
        ) {
            let text = NumberFormat::percent(SignDisplay::Always)
                .format(Decimal::new(units, 2));
            prop_assert!(text.starts_with('+') || text.starts_with('-'));
        }
    }
}
