use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten, format_value};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("result") => print_envelope(map),
        Value::Object(_) => print_fields(value),
        Value::Array(arr) => print_rows(arr),
        _ => println!("{}", value),
    }
}

fn print_envelope(envelope: &Map<String, Value>) {
    match envelope.get("result") {
        Some(Value::Array(rows)) => print_rows(rows),
        Some(Value::Null) | None => println!("(unavailable)"),
        Some(result) => print_fields(result),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten(value) {
        builder.push_record([key, format_value(&val, "n/a")]);
    }
    println!("{}", Table::from(builder));
}

/// One row per element; columns come from the flattened first row.
fn print_rows(arr: &[Value]) {
    let Some(first) = arr.first() else {
        println!("(empty)");
        return;
    };
    if !first.is_object() {
        for item in arr {
            println!("{}", format_value(item, "n/a"));
        }
        return;
    }

    let headers: Vec<String> = flatten(first).into_iter().map(|(k, _)| k).collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in arr {
        let cells = flatten(item);
        let row: Vec<String> = headers
            .iter()
            .map(|h| {
                cells
                    .iter()
                    .find(|(k, _)| k == h)
                    .map(|(_, v)| format_value(v, "n/a"))
                    .unwrap_or_else(|| "n/a".to_string())
            })
            .collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
