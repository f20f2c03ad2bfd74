use serde_json::Value;
use std::io::{self, Write};

use super::{flatten, format_value};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let _ = write_csv(&mut wtr, value);
    let _ = wtr.flush();
}

fn write_csv<W: Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Array(rows) => write_rows(wtr, rows),
        Value::Object(_) => {
            wtr.write_record(["field", "value"])?;
            for (key, val) in flatten(result) {
                wtr.write_record([key, format_value(&val, "")])?;
            }
            Ok(())
        }
        Value::Null => wtr.write_record(["field", "value"]),
        other => wtr.write_record([format_value(other, "")]),
    }
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let headers: Vec<String> = flatten(first).into_iter().map(|(k, _)| k).collect();
    wtr.write_record(&headers)?;
    for row in rows {
        let cells = flatten(row);
        let record: Vec<String> = headers
            .iter()
            .map(|h| {
                cells
                    .iter()
                    .find(|(k, _)| k == h)
                    .map(|(_, v)| format_value(v, ""))
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&record)?;
    }
    Ok(())
}
