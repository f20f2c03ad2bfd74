use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::multiples::{implied_revenue_multiple, valuation_sensitivity, ValuationSensitivity};
use super::ownership::{implied_equity_pct, ownership_split, OwnershipSplit};
use super::scenarios::{assumed_exit_scenarios, ExitScenario};
use super::waterfall::{waterfall_breakdown, WaterfallBreakdown};
use crate::deal::{AntiDilution, DealInput};
use crate::types::{with_metadata, ComputationOutput, Money, Multiple};
use crate::TermSheetResult;

/// Gap (in percentage points) between stated and amounts-implied equity
/// above which the analysis flags the terms as inconsistent.
const EQUITY_MISMATCH_TOLERANCE: Decimal = dec!(0.5);

/// Everything the engine derives from one term-sheet submission.
///
/// Each section is `None` when its inputs are degenerate (blank or
/// non-positive), never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealAnalysis {
    pub post_money: Option<Money>,
    pub implied_revenue_multiple: Option<Multiple>,
    pub valuation_sensitivity: Option<ValuationSensitivity>,
    pub ownership: Option<OwnershipSplit>,
    pub preference_amount: Option<Money>,
    /// Waterfall at the assumed exit value
    pub assumed_exit: Option<WaterfallBreakdown>,
    /// Downside / base / upside sweep around the assumed exit value
    pub exit_scenarios: Option<Vec<ExitScenario>>,
}

/// Run every engine calculation for a term-sheet submission.
///
/// Fails only on inputs that validation rejects (negative amounts,
/// out-of-range equity). Blank inputs yield `None` sections plus warnings.
pub fn analyze_deal(input: &DealInput) -> TermSheetResult<ComputationOutput<DealAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;
    let deal = &input.deal;

    let post_money = deal.post_money();
    let multiple = implied_revenue_multiple(deal.pre_money, input.company.revenue);
    let sensitivity = valuation_sensitivity(deal.pre_money);
    let ownership = ownership_split(deal.pre_money, deal.investment_amount, deal.equity_percentage);
    let preference_amount = deal.preference_amount();
    let assumed_exit = waterfall_breakdown(deal, deal.assumed_exit_value);
    let exit_scenarios = assumed_exit_scenarios(deal);

    // --- Warnings ---
    if deal.pre_money <= Decimal::ZERO {
        warnings.push(
            "Pre-money valuation is not positive; valuation scenarios and ownership are unavailable"
                .into(),
        );
    }
    if deal.investment_amount <= Decimal::ZERO {
        warnings.push("Investment amount is not positive; ownership and waterfall are unavailable".into());
    }
    if input.company.revenue <= Decimal::ZERO {
        warnings.push("Revenue is not positive; implied revenue multiple is unavailable".into());
    }
    if deal.liquidation_multiple <= Decimal::ZERO {
        warnings.push("Liquidation multiple is not positive; waterfall is unavailable".into());
    }
    let overflowed = post_money.is_none()
        || preference_amount.is_none()
        || (input.company.revenue > Decimal::ZERO && multiple.is_none())
        || (deal.pre_money > Decimal::ZERO && sensitivity.is_none())
        || (deal.assumed_exit_value > Decimal::ZERO && exit_scenarios.is_none());
    if overflowed {
        warnings.push(
            "Deal amounts exceed the supported decimal range; dependent figures are unavailable"
                .into(),
        );
    }
    if deal.assumed_exit_value <= Decimal::ZERO {
        warnings.push("Assumed exit value is not positive; exit scenarios are unavailable".into());
    }

    if ownership.is_some() {
        if deal.equity_percentage.is_zero() {
            warnings.push("Equity percentage not set; investor ownership derived from amounts".into());
        } else if let Some(implied) = implied_equity_pct(deal.pre_money, deal.investment_amount) {
            let gap = (deal.equity_percentage - implied).abs();
            if gap > EQUITY_MISMATCH_TOLERANCE {
                warnings.push(format!(
                    "Equity offered ({}%) differs from the {}% implied by investment / post-money",
                    deal.equity_percentage.normalize(),
                    implied.round_dp(2)
                ));
            }
        }
    }

    if let Some(b) = &assumed_exit {
        if b.exit_value <= b.preference {
            warnings.push(format!(
                "Assumed exit does not clear the {}x liquidation preference; common receives {}",
                deal.liquidation_multiple.normalize(),
                b.founder_payout.round_dp(2)
            ));
        }
    }

    if input.terms.instrument.converts_later() {
        warnings.push(format!(
            "{} conversion is not modelled; figures assume a priced single round",
            input.terms.instrument
        ));
    }
    if input.terms.anti_dilution != AntiDilution::None {
        warnings.push(format!(
            "{} anti-dilution only affects down rounds and is not modelled",
            input.terms.anti_dilution
        ));
    }

    let output = DealAnalysis {
        post_money: post_money.filter(|p| *p > Decimal::ZERO),
        implied_revenue_multiple: multiple,
        valuation_sensitivity: sensitivity,
        ownership,
        preference_amount,
        assumed_exit,
        exit_scenarios,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Single-round deal economics (ownership split and liquidation waterfall)",
        &serde_json::json!({
            "pre_money": deal.pre_money.to_string(),
            "investment_amount": deal.investment_amount.to_string(),
            "equity_percentage": deal.equity_percentage.to_string(),
            "liquidation_multiple": deal.liquidation_multiple.to_string(),
            "liquidation_type": deal.liquidation_type,
            "currency": deal.currency.to_string(),
            "assumed_exit_value": deal.assumed_exit_value.to_string(),
            "revenue": input.company.revenue.to_string(),
            "scenario_multiples": ["0.5", "1.0", "2.0"],
        }),
        warnings,
        elapsed,
        output,
    ))
}
