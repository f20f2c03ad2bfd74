use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use termsheet_core::deal::{CompanyProfile, DealInput, DealParameters, LiquidationType, ProtectiveTerms};
use termsheet_core::types::Currency;

use crate::input;

/// Deal terms shared by every deal-level command
#[derive(Args, Debug)]
pub struct DealArgs {
    /// Path to a JSON or YAML submission (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Pre-money valuation
    #[arg(long)]
    pub pre_money: Option<Decimal>,

    /// New money invested this round
    #[arg(long, alias = "investment-amount")]
    pub investment: Option<Decimal>,

    /// Percentage of post-money offered (0 = derive from amounts)
    #[arg(long, alias = "equity")]
    pub equity_pct: Option<Decimal>,

    /// Liquidation preference multiple (e.g. 1.0 for 1x)
    #[arg(long, default_value = "1.0")]
    pub liq_multiple: Decimal,

    /// Liquidation preference type ("non-participating" or "participating")
    #[arg(long, default_value = "non-participating")]
    pub liq_type: LiquidationType,

    /// Display currency
    #[arg(long, default_value = "USD")]
    pub currency: Currency,

    /// Assumed exit value used for the waterfall and scenario sweep
    #[arg(long, alias = "assumed-exit")]
    pub exit_value: Option<Decimal>,

    /// Annual revenue / ARR, for the implied revenue multiple
    #[arg(long)]
    pub revenue: Option<Decimal>,
}

/// Where a deal submission came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    File,
    Stdin,
    Flags,
}

impl DealArgs {
    /// Resolve the submission from `--input`, piped stdin, or flags, in that order.
    pub fn resolve(&self) -> Result<(DealInput, InputSource), Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            let deal: DealInput = input::file::read_input(path)?;
            return Ok((deal, InputSource::File));
        }
        if let Some(deal) = input::stdin::read_stdin::<DealInput>()? {
            return Ok((deal, InputSource::Stdin));
        }
        Ok((self.from_flags()?, InputSource::Flags))
    }

    fn from_flags(&self) -> Result<DealInput, Box<dyn std::error::Error>> {
        let deal = DealParameters {
            pre_money: self
                .pre_money
                .ok_or("--pre-money is required (or provide --input)")?,
            investment_amount: self
                .investment
                .ok_or("--investment is required (or provide --input)")?,
            equity_percentage: self.equity_pct.unwrap_or(Decimal::ZERO),
            liquidation_multiple: self.liq_multiple,
            liquidation_type: self.liq_type,
            currency: self.currency.clone(),
            assumed_exit_value: self.exit_value.unwrap_or(dec!(0)),
        };
        Ok(DealInput {
            company: CompanyProfile {
                revenue: self.revenue.unwrap_or(Decimal::ZERO),
                ..Default::default()
            },
            deal,
            terms: ProtectiveTerms::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        deal: DealArgs,
    }

    #[test]
    fn test_flags_build_submission() {
        let cli = TestCli::parse_from([
            "termsheet",
            "--pre-money",
            "10000000",
            "--investment",
            "3000000",
            "--liq-type",
            "Participating preferred",
            "--exit-value",
            "50000000",
        ]);
        let input = cli.deal.from_flags().unwrap();
        assert_eq!(input.deal.pre_money, dec!(10_000_000));
        assert_eq!(input.deal.equity_percentage, Decimal::ZERO);
        assert_eq!(input.deal.liquidation_multiple, dec!(1.0));
        assert_eq!(input.deal.liquidation_type, LiquidationType::Participating);
        assert_eq!(input.deal.assumed_exit_value, dec!(50_000_000));
    }

    #[test]
    fn test_missing_pre_money_is_reported() {
        let cli = TestCli::parse_from(["termsheet", "--investment", "1"]);
        let err = cli.deal.from_flags().unwrap_err();
        assert!(err.to_string().contains("--pre-money"));
    }

    #[test]
    fn test_unknown_liq_type_rejected_by_parser() {
        let parsed = TestCli::try_parse_from(["termsheet", "--liq-type", "senior"]);
        assert!(parsed.is_err());
    }
}
