use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use termsheet_core::economics;
use termsheet_core::playbook::{self, narrative::StaticPlaybook};
use termsheet_core::DealInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_deal(input_json: &str) -> NapiResult<DealInput> {
    let input: DealInput = serde_json::from_str(input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    Ok(input)
}

#[derive(Deserialize)]
struct OwnershipRequest {
    pre_money: Decimal,
    investment_amount: Decimal,
    #[serde(default)]
    equity_percentage: Decimal,
}

// ---------------------------------------------------------------------------
// Economics
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_deal(input_json: String) -> NapiResult<String> {
    let input: DealInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = economics::analysis::analyze_deal(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Returns `null` when the waterfall is unavailable for the given inputs.
#[napi]
pub fn waterfall(input_json: String) -> NapiResult<String> {
    let req: economics::waterfall::WaterfallInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    req.deal.validate().map_err(to_napi_error)?;
    let breakdown = economics::waterfall::waterfall_breakdown(&req.deal, req.exit_value);
    serde_json::to_string(&breakdown).map_err(to_napi_error)
}

#[napi]
pub fn waterfall_scenarios(input_json: String) -> NapiResult<String> {
    let req: economics::scenarios::ScenarioSweepInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    req.deal.validate().map_err(to_napi_error)?;
    let rows = economics::scenarios::waterfall_scenarios(&req.deal, req.base_exit_value);
    serde_json::to_string(&rows).map_err(to_napi_error)
}

#[napi]
pub fn ownership_split(input_json: String) -> NapiResult<String> {
    let req: OwnershipRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let split = economics::ownership::ownership_split(
        req.pre_money,
        req.investment_amount,
        req.equity_percentage,
    );
    serde_json::to_string(&split).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Playbook
// ---------------------------------------------------------------------------

#[napi]
pub fn build_playbook(input_json: String) -> NapiResult<String> {
    let input = parse_deal(&input_json)?;
    let output = playbook::build_playbook(&input, &StaticPlaybook, chrono::Utc::now())
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn negotiation_prompt(input_json: String) -> NapiResult<String> {
    let input = parse_deal(&input_json)?;
    Ok(playbook::prompt::build_negotiation_prompt(&input))
}

