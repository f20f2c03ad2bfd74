use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::waterfall::{waterfall, Payout};
use crate::deal::DealParameters;
use crate::types::{format_amount, Money, Multiple};

/// Position of an exit scenario in the fixed downside / base / upside family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioCase {
    Downside,
    Base,
    Upside,
}

impl ScenarioCase {
    /// Multiple applied to the base exit value.
    pub fn exit_multiple(&self) -> Multiple {
        match self {
            ScenarioCase::Downside => dec!(0.5),
            ScenarioCase::Base => dec!(1.0),
            ScenarioCase::Upside => dec!(2.0),
        }
    }
}

impl fmt::Display for ScenarioCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioCase::Downside => "Downside",
            ScenarioCase::Base => "Base",
            ScenarioCase::Upside => "Upside",
        };
        f.write_str(label)
    }
}

/// Scenario order is part of the contract: downside, base, upside.
pub const SCENARIO_CASES: [ScenarioCase; 3] =
    [ScenarioCase::Downside, ScenarioCase::Base, ScenarioCase::Upside];

/// One row of the exit-scenario sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitScenario {
    pub case: ScenarioCase,
    /// Display label with the multiple and the literal exit, e.g.
    /// "Downside 0.5x (25,000,000)"
    pub label: String,
    pub exit_multiple: Multiple,
    pub exit_value: Money,
    /// `None` when the deal terms make the waterfall undefined
    pub payout: Option<Payout>,
}

/// JSON-facing request for a scenario sweep. The base is named apart from a
/// single waterfall's `exit_value` since the sweep evaluates three exits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSweepInput {
    pub deal: DealParameters,
    pub base_exit_value: Money,
}

/// Waterfall at 0.5x, 1.0x and 2.0x of `base_exit_value`.
///
/// `None` for a non-positive base, or when the upside exit overflows: the
/// sweep is always all three rows or nothing.
pub fn waterfall_scenarios(
    deal: &DealParameters,
    base_exit_value: Money,
) -> Option<Vec<ExitScenario>> {
    if base_exit_value <= Decimal::ZERO {
        return None;
    }

    SCENARIO_CASES
        .iter()
        .map(|case| {
            let exit_multiple = case.exit_multiple();
            let exit_value = base_exit_value.checked_mul(exit_multiple)?;
            Some(ExitScenario {
                case: *case,
                label: format!(
                    "{} {}x ({})",
                    case,
                    exit_multiple.normalize(),
                    format_amount(exit_value)
                ),
                exit_multiple,
                exit_value,
                payout: waterfall(deal, exit_value),
            })
        })
        .collect()
}

/// Scenario sweep around the deal's own assumed exit value.
pub fn assumed_exit_scenarios(deal: &DealParameters) -> Option<Vec<ExitScenario>> {
    waterfall_scenarios(deal, deal.assumed_exit_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::LiquidationType;
    use crate::types::Currency;

    fn deal() -> DealParameters {
        DealParameters {
            pre_money: dec!(10_000_000),
            investment_amount: dec!(3_000_000),
            equity_percentage: dec!(20),
            liquidation_multiple: dec!(1.0),
            liquidation_type: LiquidationType::NonParticipating,
            currency: Currency::USD,
            assumed_exit_value: dec!(50_000_000),
        }
    }

    #[test]
    fn test_sweep_exit_values_in_order() {
        let scenarios = waterfall_scenarios(&deal(), dec!(50_000_000)).unwrap();
        let exits: Vec<Money> = scenarios.iter().map(|s| s.exit_value).collect();
        assert_eq!(
            exits,
            vec![dec!(25_000_000), dec!(50_000_000), dec!(100_000_000)]
        );
        let cases: Vec<ScenarioCase> = scenarios.iter().map(|s| s.case).collect();
        assert_eq!(cases, SCENARIO_CASES.to_vec());
    }

    #[test]
    fn test_labels_carry_multiple_and_exit() {
        let scenarios = waterfall_scenarios(&deal(), dec!(50_000_000)).unwrap();
        assert_eq!(scenarios[0].label, "Downside 0.5x (25,000,000)");
        assert_eq!(scenarios[1].label, "Base 1x (50,000,000)");
        assert_eq!(scenarios[2].label, "Upside 2x (100,000,000)");
    }

    #[test]
    fn test_each_scenario_uses_waterfall() {
        let scenarios = waterfall_scenarios(&deal(), dec!(50_000_000)).unwrap();
        let base = scenarios[1].payout.unwrap();
        assert_eq!(base.investor_payout, dec!(10_000_000));
        assert_eq!(base.founder_payout, dec!(40_000_000));

        let upside = scenarios[2].payout.unwrap();
        assert_eq!(upside.investor_payout, dec!(20_000_000));
    }

    #[test]
    fn test_unavailable_for_non_positive_base() {
        assert!(waterfall_scenarios(&deal(), Decimal::ZERO).is_none());
        assert!(waterfall_scenarios(&deal(), dec!(-10)).is_none());
    }

    #[test]
    fn test_degenerate_deal_keeps_rows_without_payouts() {
        let mut d = deal();
        d.investment_amount = Decimal::ZERO;
        let scenarios = waterfall_scenarios(&d, dec!(50_000_000)).unwrap();
        assert_eq!(scenarios.len(), 3);
        assert!(scenarios.iter().all(|s| s.payout.is_none()));
    }

    #[test]
    fn test_upside_overflow_makes_sweep_unavailable() {
        let base = dec!(50_000_000_000_000_000_000_000_000_000);
        assert!(waterfall_scenarios(&deal(), base).is_none());

        // 2x of 3.9e28 still fits
        let sweep = waterfall_scenarios(&deal(), dec!(39_000_000_000_000_000_000_000_000_000)).unwrap();
        assert_eq!(sweep.len(), 3);
        assert!(sweep.iter().all(|s| s.payout.is_some()));
    }

    #[test]
    fn test_sweep_input_takes_base_exit_value() {
        let json = serde_json::json!({
            "deal": {
                "pre_money": "10000000",
                "investment_amount": "3000000",
                "equity_percentage": "20",
                "liquidation_multiple": "1",
                "liquidation_type": "participating"
            },
            "base_exit_value": "50000000"
        });
        let req: ScenarioSweepInput = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(req.base_exit_value, dec!(50_000_000));
        let sweep = waterfall_scenarios(&req.deal, req.base_exit_value).unwrap();
        assert_eq!(sweep[1].exit_value, dec!(50_000_000));

        // A single waterfall's field name is not accepted for the sweep
        let mut wrong = json;
        let base = wrong["base_exit_value"].take();
        wrong["exit_value"] = base;
        wrong.as_object_mut().unwrap().remove("base_exit_value");
        assert!(serde_json::from_value::<ScenarioSweepInput>(wrong).is_err());
    }

    #[test]
    fn test_assumed_exit_scenarios_uses_deal_exit() {
        let scenarios = assumed_exit_scenarios(&deal()).unwrap();
        assert_eq!(scenarios[1].exit_value, dec!(50_000_000));

        let mut d = deal();
        d.assumed_exit_value = Decimal::ZERO;
        assert!(assumed_exit_scenarios(&d).is_none());
    }
}
