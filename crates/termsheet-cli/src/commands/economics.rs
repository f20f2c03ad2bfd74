use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Instant;

use termsheet_core::economics::{analysis, multiples, ownership, scenarios, waterfall};
use termsheet_core::types::with_metadata;

use super::deal::DealArgs;

/// Arguments for the full deal analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub deal: DealArgs,
}

/// Arguments for a single liquidation waterfall
#[derive(Args)]
pub struct WaterfallArgs {
    #[command(flatten)]
    pub deal: DealArgs,
}

/// Arguments for the downside / base / upside exit sweep
#[derive(Args)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub deal: DealArgs,

    /// Base exit value for the sweep (defaults to the assumed exit value)
    #[arg(long)]
    pub base_exit: Option<Decimal>,
}

/// Arguments for the post-money ownership split
#[derive(Args)]
pub struct OwnershipArgs {
    /// Pre-money valuation
    #[arg(long)]
    pub pre_money: Decimal,

    /// New money invested this round
    #[arg(long, alias = "investment-amount")]
    pub investment: Decimal,

    /// Percentage of post-money offered (0 = derive from amounts)
    #[arg(long, alias = "equity", default_value = "0")]
    pub equity_pct: Decimal,
}

/// Arguments for the implied revenue multiple and valuation band
#[derive(Args)]
pub struct MultipleArgs {
    /// Pre-money valuation
    #[arg(long)]
    pub pre_money: Decimal,

    /// Annual revenue / ARR
    #[arg(long, default_value = "0")]
    pub revenue: Decimal,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (input, source) = args.deal.resolve()?;
    tracing::debug!(?source, "resolved deal submission");

    let result = analysis::analyze_deal(&input)?;
    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        post_money = ?result.result.post_money,
        warnings = result.warnings.len(),
        "deal analysed"
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_waterfall(args: WaterfallArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let (input, source) = args.deal.resolve()?;
    tracing::debug!(?source, "resolved deal submission");
    input.validate()?;

    let deal = &input.deal;
    let breakdown = waterfall::waterfall_breakdown(deal, deal.assumed_exit_value);
    let mut warnings = Vec::new();
    if breakdown.is_none() {
        warnings.push(
            "Waterfall unavailable: pre-money, investment, liquidation multiple and exit value \
             must all be positive"
                .to_string(),
        );
    }
    tracing::info!(available = breakdown.is_some(), exit_value = %deal.assumed_exit_value, "waterfall computed");

    let output = with_metadata(
        "Single-round liquidation waterfall",
        deal,
        warnings,
        start.elapsed().as_micros() as u64,
        breakdown,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_scenarios(args: ScenariosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let (input, source) = args.deal.resolve()?;
    tracing::debug!(?source, "resolved deal submission");
    input.validate()?;

    let deal = &input.deal;
    let base_exit = args.base_exit.unwrap_or(deal.assumed_exit_value);
    let sweep = scenarios::waterfall_scenarios(deal, base_exit);

    let mut warnings = Vec::new();
    match &sweep {
        None => warnings.push("Exit scenarios unavailable: base exit value must be positive".to_string()),
        Some(rows) if rows.iter().all(|r| r.payout.is_none()) => warnings.push(
            "Waterfall unavailable for every scenario: pre-money, investment and liquidation \
             multiple must be positive"
                .to_string(),
        ),
        Some(_) => {}
    }
    tracing::info!(base_exit = %base_exit, available = sweep.is_some(), "exit scenarios computed");

    let output = with_metadata(
        "Exit scenario sweep (0.5x / 1.0x / 2.0x of base exit)",
        &serde_json::json!({ "deal": deal, "base_exit": base_exit.to_string() }),
        warnings,
        start.elapsed().as_micros() as u64,
        sweep,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_ownership(args: OwnershipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let split = ownership::ownership_split(args.pre_money, args.investment, args.equity_pct);

    let mut warnings = Vec::new();
    if split.is_none() {
        warnings.push("Ownership unavailable: pre-money and investment must be positive".to_string());
    }

    let output = with_metadata(
        "Post-money ownership split",
        &serde_json::json!({
            "pre_money": args.pre_money.to_string(),
            "investment_amount": args.investment.to_string(),
            "equity_percentage": args.equity_pct.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        split,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_multiple(args: MultipleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let multiple = multiples::implied_revenue_multiple(args.pre_money, args.revenue);
    let sensitivity = multiples::valuation_sensitivity(args.pre_money);

    let mut warnings = Vec::new();
    if multiple.is_none() {
        warnings.push("Implied revenue multiple unavailable: revenue must be positive".to_string());
    }
    if sensitivity.is_none() {
        warnings.push("Valuation scenarios unavailable: pre-money must be positive".to_string());
    }

    let output = with_metadata(
        "Implied revenue multiple and +/-20% valuation band",
        &serde_json::json!({
            "pre_money": args.pre_money.to_string(),
            "revenue": args.revenue.to_string(),
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        serde_json::json!({
            "implied_revenue_multiple": multiple,
            "valuation_sensitivity": sensitivity,
        }),
    );
    Ok(serde_json::to_value(output)?)
}
