use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.20 = 20%). Percentages are named `*_pct`.
pub type Rate = Decimal;

/// Multiples (e.g., 1.0x liquidation preference, 5.0x revenue)
pub type Multiple = Decimal;

/// Display currency for a deal. The engine never converts between currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    Other(String),
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
            Currency::Other(code) if code.trim().is_empty() => write!(f, "Other"),
            Currency::Other(code) => write!(f, "{}", code.trim()),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "GBP" => Currency::GBP,
            _ => Currency::Other(s.trim().to_string()),
        })
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Format an amount with thousands separators and no decimals, e.g.
/// `25_000_000` -> `"25,000,000"`. Used for scenario labels and summaries.
pub fn format_amount(value: Money) -> String {
    let rounded = value.round_dp(0);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(25_000_000)), "25,000,000");
        assert_eq!(format_amount(dec!(999)), "999");
        assert_eq!(format_amount(dec!(1000)), "1,000");
        assert_eq!(format_amount(dec!(0)), "0");
    }

    #[test]
    fn test_format_amount_rounds_and_signs() {
        assert_eq!(format_amount(dec!(1234567.6)), "1,234,568");
        assert_eq!(format_amount(dec!(-4500)), "-4,500");
    }

    #[test]
    fn test_currency_display_and_parse() {
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!(
            "CHF".parse::<Currency>().unwrap(),
            Currency::Other("CHF".into())
        );
        assert_eq!(Currency::Other(String::new()).to_string(), "Other");
    }
}
