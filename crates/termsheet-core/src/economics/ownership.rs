use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Post-money ownership split, in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipSplit {
    pub new_investor_pct: Decimal,
    pub existing_holders_pct: Decimal,
}

/// Percentage of post-money bought by `investment_amount` at `pre_money`.
pub fn implied_equity_pct(pre_money: Money, investment_amount: Money) -> Option<Decimal> {
    let post_money = pre_money.checked_add(investment_amount)?;
    if post_money <= Decimal::ZERO {
        return None;
    }
    investment_amount.checked_div(post_money)?.checked_mul(dec!(100))
}

/// Split post-money ownership between the new investor and existing holders.
///
/// A stated `equity_percentage` wins over the amounts-implied figure. Existing
/// holders are clamped at zero so an over-100 percentage never shows negative.
pub fn ownership_split(
    pre_money: Money,
    investment_amount: Money,
    equity_percentage: Decimal,
) -> Option<OwnershipSplit> {
    if pre_money <= Decimal::ZERO || investment_amount <= Decimal::ZERO {
        return None;
    }

    let new_investor_pct = if equity_percentage > Decimal::ZERO {
        equity_percentage
    } else {
        implied_equity_pct(pre_money, investment_amount)?
    };
    let existing_holders_pct = (dec!(100) - new_investor_pct).max(Decimal::ZERO);

    Some(OwnershipSplit {
        new_investor_pct,
        existing_holders_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_from_amounts() {
        let split = ownership_split(dec!(10_000_000), dec!(3_000_000), Decimal::ZERO).unwrap();
        assert_eq!(split.new_investor_pct.round_dp(2), dec!(23.08));
        assert_eq!(split.existing_holders_pct.round_dp(2), dec!(76.92));
        assert_eq!(
            split.new_investor_pct + split.existing_holders_pct,
            dec!(100)
        );
    }

    #[test]
    fn test_stated_percentage_wins() {
        let split = ownership_split(dec!(10_000_000), dec!(3_000_000), dec!(20)).unwrap();
        assert_eq!(split.new_investor_pct, dec!(20));
        assert_eq!(split.existing_holders_pct, dec!(80));
    }

    #[test]
    fn test_existing_holders_clamped() {
        let split = ownership_split(dec!(1_000_000), dec!(500_000), dec!(120)).unwrap();
        assert_eq!(split.new_investor_pct, dec!(120));
        assert_eq!(split.existing_holders_pct, Decimal::ZERO);
    }

    #[test]
    fn test_unavailable_without_amounts() {
        assert!(ownership_split(Decimal::ZERO, dec!(3_000_000), dec!(20)).is_none());
        assert!(ownership_split(dec!(10_000_000), Decimal::ZERO, dec!(20)).is_none());
    }

    #[test]
    fn test_overflowing_post_money_is_unavailable() {
        assert_eq!(implied_equity_pct(Decimal::MAX, Decimal::MAX), None);
        assert!(ownership_split(Decimal::MAX, Decimal::MAX, Decimal::ZERO).is_none());
        // A stated percentage needs no post-money
        let split = ownership_split(Decimal::MAX, Decimal::MAX, dec!(25)).unwrap();
        assert_eq!(split.existing_holders_pct, dec!(75));
    }

    #[test]
    fn test_implied_equity_pct_guards_zero_post_money() {
        assert_eq!(implied_equity_pct(Decimal::ZERO, Decimal::ZERO), None);
        assert_eq!(
            implied_equity_pct(dec!(4_000_000), dec!(1_000_000)),
            Some(dec!(20))
        );
    }
}
