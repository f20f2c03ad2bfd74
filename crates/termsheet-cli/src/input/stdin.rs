use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a piped submission from stdin. JSON is tried first, then YAML.
///
/// Returns `None` when stdin is a TTY or the pipe is empty, so callers can
/// fall back to command-line flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(Some(value)),
        Err(json_err) if trimmed.starts_with('{') => {
            Err(format!("Failed to parse stdin as JSON: {}", json_err).into())
        }
        Err(_) => {
            let value = serde_yaml::from_str(trimmed)
                .map_err(|e| format!("Failed to parse stdin as JSON or YAML: {}", e))?;
            Ok(Some(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termsheet_core::deal::DealParameters;

    #[test]
    fn test_empty_pipe_is_none() {
        let parsed: Option<DealParameters> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_and_yaml_pipes() {
        let json = r#"{"pre_money": 1000, "investment_amount": 250,
            "liquidation_multiple": 1, "liquidation_type": "participating"}"#;
        let parsed: Option<DealParameters> = parse_piped(json).unwrap();
        assert_eq!(parsed.unwrap().post_money(), Some(rust_decimal::Decimal::from(1250)));

        let yaml = "pre_money: 1000\ninvestment_amount: 250\nliquidation_multiple: 1\nliquidation_type: non_participating\n";
        let parsed: Option<DealParameters> = parse_piped(yaml).unwrap();
        assert!(parsed.is_some());
    }

    #[test]
    fn test_broken_json_not_retried_as_yaml() {
        let parsed: Result<Option<DealParameters>, _> = parse_piped("{\"pre_money\": ");
        assert!(parsed.unwrap_err().to_string().contains("as JSON"));
    }
}
