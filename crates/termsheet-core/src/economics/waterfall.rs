use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::deal::{DealParameters, LiquidationType};
use crate::types::{Money, Rate};

/// Investor claims are rounded to this many decimal places before the split,
/// which keeps `investor + founder == exit` exact in 128-bit decimal.
pub const PAYOUT_DP: u32 = 10;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Exit proceeds split between the preferred investor and common / founders.
///
/// `Payout::default()` is the all-zero split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub investor_payout: Money,
    pub founder_payout: Money,
}

impl Payout {
    pub fn total(&self) -> Money {
        self.investor_payout + self.founder_payout
    }

    /// Investor share of total proceeds as a decimal; `None` for an empty split.
    pub fn investor_share(&self) -> Option<Rate> {
        let total = self.total();
        if total <= Decimal::ZERO {
            return None;
        }
        Some(self.investor_payout / total)
    }
}

/// Step-by-step view of one waterfall evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterfallBreakdown {
    pub exit_value: Money,
    pub liquidation_type: LiquidationType,
    /// Investor ownership fraction used for the pro-rata leg
    pub ownership: Rate,
    /// investment x liquidation multiple
    pub preference: Money,
    /// Proceeds left after the preference (participating leg), floored at zero
    pub remaining: Money,
    /// Non-participating: ownership x exit (the as-converted alternative).
    /// Participating: ownership x remaining (the participation on top).
    pub pro_rata_share: Money,
    /// Non-participating investor is better off converting to common
    pub converts: bool,
    /// Investor claim exceeded the exit value and was capped
    pub capped: bool,
    pub investor_payout: Money,
    pub founder_payout: Money,
}

/// JSON-facing request for a single waterfall evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallInput {
    pub deal: DealParameters,
    pub exit_value: Money,
}

impl WaterfallBreakdown {
    pub fn payout(&self) -> Payout {
        Payout {
            investor_payout: self.investor_payout,
            founder_payout: self.founder_payout,
        }
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Single-round liquidation waterfall with intermediate terms.
///
/// `None` when pre-money, investment, liquidation multiple or exit value is
/// not positive (nothing meaningful to distribute), or when an intermediate
/// amount overflows the decimal range.
///
/// Non-participating compares the flat preference with a full pro-rata
/// share of the total exit (not net of the preference).
pub fn waterfall_breakdown(
    deal: &DealParameters,
    exit_value: Money,
) -> Option<WaterfallBreakdown> {
    if deal.pre_money <= Decimal::ZERO
        || deal.investment_amount <= Decimal::ZERO
        || deal.liquidation_multiple <= Decimal::ZERO
        || exit_value <= Decimal::ZERO
    {
        return None;
    }

    let ownership = deal.investor_ownership()?;
    let preference = deal.preference_amount()?;

    let (remaining, pro_rata_share, converts, claim) = match deal.liquidation_type {
        LiquidationType::NonParticipating => {
            let as_converted = ownership.checked_mul(exit_value)?;
            let converts = as_converted > preference;
            let claim = preference.max(as_converted);
            (Decimal::ZERO, as_converted, converts, claim)
        }
        LiquidationType::Participating => {
            let remaining = (exit_value - preference).max(Decimal::ZERO);
            let participation = ownership.checked_mul(remaining)?;
            let claim = preference.checked_add(participation)?;
            (remaining, participation, false, claim)
        }
    };

    let investor_payout = claim.round_dp(PAYOUT_DP).min(exit_value);
    let founder_payout = (exit_value - investor_payout).max(Decimal::ZERO);

    Some(WaterfallBreakdown {
        exit_value,
        liquidation_type: deal.liquidation_type,
        ownership,
        preference,
        remaining,
        pro_rata_share,
        converts,
        capped: claim > exit_value,
        investor_payout,
        founder_payout,
    })
}

/// Investor / founder split of `exit_value` under the deal's preference terms.
pub fn waterfall(deal: &DealParameters, exit_value: Money) -> Option<Payout> {
    waterfall_breakdown(deal, exit_value).map(|b| b.payout())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
