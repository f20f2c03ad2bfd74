use serde_json::Value;

use super::format_value;

/// Headline fields, most specific first. Dotted keys reach into nested objects.
const HEADLINE_KEYS: [&str; 7] = [
    "investor_payout",
    "new_investor_pct",
    "implied_revenue_multiple",
    "assumed_exit.investor_payout",
    "post_money",
    "guidance",
    "version",
];

/// Print just the key answer from the output.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);
    println!("{}", headline(result));
}

fn headline(result: &Value) -> String {
    match result {
        Value::Array(rows) => rows
            .iter()
            .map(headline)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => {
            let label = map.get("label").and_then(Value::as_str);
            let target = map.get("payout").filter(|p| p.is_object()).unwrap_or(result);
            let found = HEADLINE_KEYS
                .iter()
                .find_map(|key| lookup(target, key).filter(|v| !v.is_null()));
            let answer = match (found, map.iter().next()) {
                _ if map.get("payout").is_some_and(Value::is_null) => "n/a".to_string(),
                (Some(v), _) => format_value(v, "n/a"),
                (None, Some((key, v))) => format!("{}: {}", key, format_value(v, "n/a")),
                (None, None) => "n/a".to_string(),
            };
            match label {
                Some(l) => format!("{}: {}", l, answer),
                None => answer,
            }
        }
        other => format_value(other, "n/a"),
    }
}

fn lookup<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(value, |v, part| v.as_object().and_then(|m| m.get(part)))
}
