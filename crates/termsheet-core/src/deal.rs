use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TermSheetError;
use crate::types::{Currency, Money, Multiple, Rate};
use crate::TermSheetResult;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How the new preferred shares behave at exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidationType {
    /// Investor takes the preference OR converts to common, whichever is larger.
    #[default]
    #[serde(alias = "Non-participating preferred", alias = "non-participating")]
    NonParticipating,
    /// Investor takes the preference AND shares the remainder pro-rata.
    #[serde(alias = "Participating preferred")]
    Participating,
}

impl FromStr for LiquidationType {
    type Err = TermSheetError;

    /// Accepts form labels like "Non-participating preferred". The
    /// non-participating check must run first since it contains "participating".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace(['_', ' '], "-");
        if lower.contains("non-participating") || lower.contains("nonparticipating") {
            Ok(LiquidationType::NonParticipating)
        } else if lower.contains("participating") {
            Ok(LiquidationType::Participating)
        } else {
            Err(TermSheetError::InvalidInput {
                field: "liquidation_type".into(),
                reason: format!(
                    "Unrecognised liquidation preference type '{}' \
                     (expected non-participating or participating)",
                    s
                ),
            })
        }
    }
}

impl fmt::Display for LiquidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidationType::NonParticipating => write!(f, "Non-participating preferred"),
            LiquidationType::Participating => write!(f, "Participating preferred"),
        }
    }
}

/// Company stage at the time of the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    PreSeed,
    #[default]
    Seed,
    SeriesA,
    SeriesB,
    Later,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::PreSeed => "Pre-seed",
            Stage::Seed => "Seed",
            Stage::SeriesA => "Series A",
            Stage::SeriesB => "Series B",
            Stage::Later => "Later",
        };
        f.write_str(label)
    }
}

/// Security being sold in the round. Descriptive only: conversion mechanics
/// for SAFEs and notes are not modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    #[default]
    PreferredEquity,
    Safe,
    ConvertibleNote,
    CommonEquity,
}

impl Instrument {
    /// True for instruments whose economics depend on a later priced round.
    pub fn converts_later(&self) -> bool {
        matches!(self, Instrument::Safe | Instrument::ConvertibleNote)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Instrument::PreferredEquity => "Preferred Equity",
            Instrument::Safe => "SAFE",
            Instrument::ConvertibleNote => "Convertible Note",
            Instrument::CommonEquity => "Common Equity",
        };
        f.write_str(label)
    }
}

/// Anti-dilution protection requested by the investor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntiDilution {
    #[default]
    None,
    BroadBasedWeightedAverage,
    NarrowBasedWeightedAverage,
    FullRatchet,
}

impl fmt::Display for AntiDilution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AntiDilution::None => "None",
            AntiDilution::BroadBasedWeightedAverage => "Broad-based weighted-average",
            AntiDilution::NarrowBasedWeightedAverage => "Narrow-based weighted-average",
            AntiDilution::FullRatchet => "Full ratchet",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The economic terms of a single financing round.
///
/// Immutable once submitted. Everything the engine derives (post-money,
/// ownership, waterfall payouts) is recomputed from these fields on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealParameters {
    /// Pre-money valuation
    pub pre_money: Money,
    /// New money invested this round
    pub investment_amount: Money,
    /// Percentage (0-100) of post-money equity granted; 0 = derive from amounts
    #[serde(default)]
    pub equity_percentage: Decimal,
    /// Liquidation preference as a multiple of invested capital (1.0 = 1x)
    pub liquidation_multiple: Multiple,
    pub liquidation_type: LiquidationType,
    #[serde(default)]
    pub currency: Currency,
    /// Reference exit value for the downside / base / upside family
    #[serde(default)]
    pub assumed_exit_value: Money,
}

impl DealParameters {
    /// Pre-money plus new money. `None` if the sum overflows.
    pub fn post_money(&self) -> Option<Money> {
        self.pre_money.checked_add(self.investment_amount)
    }

    /// New investor's ownership as a fraction of post-money.
    ///
    /// Uses the stated equity percentage when set, otherwise
    /// `investment / post_money`. `None` when neither is meaningful.
    pub fn investor_ownership(&self) -> Option<Rate> {
        if self.equity_percentage > Decimal::ZERO {
            return Some(self.equity_percentage / dec!(100));
        }
        let post_money = self.post_money()?;
        if post_money <= Decimal::ZERO {
            return None;
        }
        self.investment_amount.checked_div(post_money)
    }

    /// Capital returned to the investor ahead of common. `None` if the
    /// product overflows.
    pub fn preference_amount(&self) -> Option<Money> {
        self.investment_amount.checked_mul(self.liquidation_multiple)
    }

    /// Reject values no form should ever submit. Zero amounts are allowed:
    /// they are the normal state of an unfilled form and simply make the
    /// derived metrics unavailable.
    pub fn validate(&self) -> TermSheetResult<()> {
        non_negative("pre_money", self.pre_money)?;
        non_negative("investment_amount", self.investment_amount)?;
        non_negative("liquidation_multiple", self.liquidation_multiple)?;
        non_negative("assumed_exit_value", self.assumed_exit_value)?;
        if self.equity_percentage < Decimal::ZERO || self.equity_percentage > dec!(100) {
            return Err(TermSheetError::InvalidInput {
                field: "equity_percentage".into(),
                reason: "Equity percentage must be between 0 and 100".into(),
            });
        }
        Ok(())
    }
}

/// Descriptive profile of the company raising the round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub stage: Stage,
    pub country: String,
    /// Annual revenue / ARR
    pub revenue: Money,
    /// Year-on-year growth in percent (50 = 50%)
    pub growth_pct: Decimal,
    pub description: String,
}

/// Non-economic terms that shape the negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectiveTerms {
    pub instrument: Instrument,
    pub anti_dilution: AntiDilution,
    pub board_seats: u32,
    pub other_terms: String,
}

impl Default for ProtectiveTerms {
    fn default() -> Self {
        Self {
            instrument: Instrument::PreferredEquity,
            anti_dilution: AntiDilution::None,
            board_seats: 1,
            other_terms: String::new(),
        }
    }
}

/// A complete term-sheet submission: who is raising, on what economics,
/// with which protective terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealInput {
    #[serde(default)]
    pub company: CompanyProfile,
    pub deal: DealParameters,
    #[serde(default)]
    pub terms: ProtectiveTerms,
}

impl DealInput {
    pub fn validate(&self) -> TermSheetResult<()> {
        self.deal.validate()?;
        non_negative("company.revenue", self.company.revenue)?;
        if self.company.growth_pct < dec!(-100) {
            return Err(TermSheetError::InvalidInput {
                field: "company.growth_pct".into(),
                reason: "Growth cannot be below -100%".into(),
            });
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: Decimal) -> TermSheetResult<()> {
    if value < Decimal::ZERO {
        return Err(TermSheetError::InvalidInput {
            field: field.into(),
            reason: "Value cannot be negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
