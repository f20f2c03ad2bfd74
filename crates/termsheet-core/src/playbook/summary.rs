use chrono::{DateTime, Utc};

use crate::deal::DealInput;
use crate::types::format_amount;

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value.trim()
    }
}

/// Plain-text deal summary for export alongside the negotiation guidance.
pub fn render_summary(input: &DealInput, generated_at: DateTime<Utc>) -> String {
    let company = &input.company;
    let deal = &input.deal;
    let terms = &input.terms;

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "Generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());
    lines.push(format!("Company: {}", or_na(&company.name)));
    lines.push(format!(
        "Industry: {} | Stage: {}",
        or_na(&company.industry),
        company.stage
    ));
    lines.push(format!(
        "Country: {} | Currency: {}",
        or_na(&company.country),
        deal.currency
    ));
    lines.push(String::new());
    lines.push(format!("Pre-money valuation: {}", format_amount(deal.pre_money)));
    lines.push(format!(
        "Investment amount: {}",
        format_amount(deal.investment_amount)
    ));
    lines.push(format!(
        "Equity offered: {:.1}% ({})",
        deal.equity_percentage.round_dp(1),
        terms.instrument
    ));
    lines.push(String::new());
    lines.push(format!(
        "Liquidation preference: {}x ({})",
        deal.liquidation_multiple.normalize(),
        deal.liquidation_type
    ));
    lines.push(format!("Anti-dilution: {}", terms.anti_dilution));
    lines.push(format!("Board seats: {}", terms.board_seats));
    lines.push(String::new());
    lines.push(format!(
        "Assumed exit (for visuals): {}",
        format_amount(deal.assumed_exit_value)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::{CompanyProfile, DealParameters, LiquidationType, ProtectiveTerms};
    use crate::types::Currency;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_formats_amounts() {
        let input = DealInput {
            company: CompanyProfile::default(),
            deal: DealParameters {
                pre_money: dec!(10_000_000),
                investment_amount: dec!(3_000_000),
                equity_percentage: dec!(23.077),
                liquidation_multiple: dec!(1.0),
                liquidation_type: LiquidationType::NonParticipating,
                currency: Currency::GBP,
                assumed_exit_value: dec!(50_000_000),
            },
            terms: ProtectiveTerms::default(),
        };
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let text = render_summary(&input, at);

        assert!(text.starts_with("Generated on: 2026-03-14 09:30 UTC\n"));
        assert!(text.contains("Company: N/A\n"));
        assert!(text.contains("Country: N/A | Currency: GBP\n"));
        assert!(text.contains("Pre-money valuation: 10,000,000\n"));
        assert!(text.contains("Equity offered: 23.1% (Preferred Equity)\n"));
        assert!(text.contains("Liquidation preference: 1x (Non-participating preferred)\n"));
        assert!(text.contains("Assumed exit (for visuals): 50,000,000\n"));
    }
}
