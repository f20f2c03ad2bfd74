use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Multiple};

/// Downside valuation as a fraction of pre-money (illustrative spread).
pub const SENSITIVITY_DOWNSIDE: Decimal = dec!(0.8);
/// Upside valuation as a fraction of pre-money (illustrative spread).
pub const SENSITIVITY_UPSIDE: Decimal = dec!(1.2);

/// Pre-money valuation under a fixed ±20% band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSensitivity {
    pub downside: Money,
    pub base: Money,
    pub upside: Money,
}

/// Pre-money valuation divided by annual revenue.
///
/// `None` when revenue is zero or negative (no multiple is meaningful then)
/// or when the quotient overflows.
pub fn implied_revenue_multiple(pre_money: Money, revenue: Money) -> Option<Multiple> {
    if revenue <= Decimal::ZERO {
        return None;
    }
    pre_money.checked_div(revenue)
}

/// Downside / base / upside pre-money valuations. `None` for a non-positive
/// pre-money or an upside beyond the decimal range.
pub fn valuation_sensitivity(pre_money: Money) -> Option<ValuationSensitivity> {
    if pre_money <= Decimal::ZERO {
        return None;
    }
    Some(ValuationSensitivity {
        downside: pre_money.checked_mul(SENSITIVITY_DOWNSIDE)?,
        base: pre_money,
        upside: pre_money.checked_mul(SENSITIVITY_UPSIDE)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_multiple() {
        assert_eq!(
            implied_revenue_multiple(dec!(10_000_000), dec!(2_000_000)),
            Some(dec!(5))
        );
    }

    #[test]
    fn test_revenue_multiple_unavailable_without_revenue() {
        assert_eq!(implied_revenue_multiple(dec!(10_000_000), Decimal::ZERO), None);
        assert_eq!(implied_revenue_multiple(dec!(10_000_000), dec!(-5)), None);
    }

    #[test]
    fn test_revenue_multiple_zero_pre_money_is_zero_multiple() {
        assert_eq!(
            implied_revenue_multiple(Decimal::ZERO, dec!(1_000_000)),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_sensitivity_band() {
        let s = valuation_sensitivity(dec!(10_000_000)).unwrap();
        assert_eq!(s.downside, dec!(8_000_000));
        assert_eq!(s.base, dec!(10_000_000));
        assert_eq!(s.upside, dec!(12_000_000));
    }

    #[test]
    fn test_overflow_is_unavailable() {
        assert!(valuation_sensitivity(Decimal::MAX).is_none());
        assert_eq!(implied_revenue_multiple(Decimal::MAX, dec!(0.001)), None);
        assert!(valuation_sensitivity(dec!(60_000_000_000_000_000_000_000_000_000)).is_some());
    }

    #[test]
    fn test_sensitivity_unavailable_for_non_positive() {
        assert!(valuation_sensitivity(Decimal::ZERO).is_none());
        assert!(valuation_sensitivity(dec!(-1)).is_none());
    }
}
