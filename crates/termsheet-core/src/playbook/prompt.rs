use serde_json::Value;

use crate::deal::DealInput;
use crate::TermSheetResult;

/// Guidance sections the narrative is expected to return, in order.
pub const GUIDANCE_SECTIONS: [&str; 4] = [
    "[Valuation]",
    "[Anti-Dilution]",
    "[Liquidation Preferences]",
    "[Other]",
];

/// Build the negotiation brief sent to the narrative generator.
///
/// Only raw submission fields go in; engine outputs are never part of the
/// prompt so the narrative stays independent of the calculations.
pub fn build_negotiation_prompt(input: &DealInput) -> String {
    let company = &input.company;
    let deal = &input.deal;
    let terms = &input.terms;

    let mut prompt = String::new();
    prompt.push_str("You are a term sheet negotiation advisor.\n\n");

    prompt.push_str("Company:\n");
    prompt.push_str(&format!("- Name: {}\n", company.name));
    prompt.push_str(&format!("- Industry: {}\n", company.industry));
    prompt.push_str(&format!("- Stage: {}\n", company.stage));
    prompt.push_str(&format!("- Country: {}\n", company.country));
    prompt.push_str(&format!("- ARR: {}\n", company.revenue));
    prompt.push_str(&format!("- Growth: {}%\n", company.growth_pct.normalize()));
    if !company.description.trim().is_empty() {
        prompt.push_str(&format!("- Description: {}\n", company.description.trim()));
    }

    prompt.push_str("\nDeal:\n");
    prompt.push_str(&format!("- Pre-money: {} {}\n", deal.pre_money, deal.currency));
    prompt.push_str(&format!(
        "- Investment: {} {}\n",
        deal.investment_amount, deal.currency
    ));
    prompt.push_str(&format!(
        "- Equity: {}%\n",
        deal.equity_percentage.normalize()
    ));
    prompt.push_str(&format!("- Instrument: {}\n", terms.instrument));
    prompt.push_str(&format!(
        "- Liquidation: {}x {}\n",
        deal.liquidation_multiple.normalize(),
        deal.liquidation_type
    ));
    prompt.push_str(&format!("- Anti-dilution: {}\n", terms.anti_dilution));
    prompt.push_str(&format!("- Board seats: {}\n", terms.board_seats));
    prompt.push_str(&format!("- Other: {}\n", terms.other_terms.trim()));

    prompt.push_str("\nGive negotiation guidance in bullet points, grouped as:\n");
    prompt.push_str(&GUIDANCE_SECTIONS.join(", "));
    prompt.push_str(".\n");
    prompt
}

/// JSON view of the submission handed to an external narrative service.
pub fn narrative_projection(input: &DealInput) -> TermSheetResult<Value> {
    Ok(serde_json::to_value(input)?)
}
