use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Keys inside a result object that hold per-tier line arrays; these are
/// rendered as their own tables rather than inlined into the summary.
const LINE_ARRAY_KEYS: [&str; 3] = ["lines", "slab_lines", "surcharges"];

/// Format a computation envelope as tables: scalar summary first, then one
/// table per breakdown line array, then warnings and methodology.
pub fn print_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    match map.get("result") {
        Some(Value::Object(result)) => {
            print_summary_table(result);
            print_line_tables(result);
            print_envelope_notes(map);
        }
        _ => print_summary_table(map),
    }
}

fn print_summary_table(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if is_line_array(key, val) || key == "breakdown" {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_line_tables(result: &serde_json::Map<String, Value>) {
    // Bill outputs nest the line arrays inside "breakdown"; tax outputs
    // carry "slab_lines" at the top level.
    if let Some(Value::Object(breakdown)) = result.get("breakdown") {
        for key in LINE_ARRAY_KEYS {
            if let Some(Value::Array(lines)) = breakdown.get(key) {
                print_lines(key, lines);
            }
        }
    }
    for key in LINE_ARRAY_KEYS {
        if let Some(Value::Array(lines)) = result.get(key) {
            print_lines(key, lines);
        }
    }
}

fn print_lines(title: &str, lines: &[Value]) {
    if lines.is_empty() {
        return;
    }
    let Some(Value::Object(first)) = lines.first() else {
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for line in lines {
        if let Value::Object(map) = line {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    println!("\n{}:", title);
    println!("{}", Table::from(builder));
}

fn print_envelope_notes(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn is_line_array(key: &str, value: &Value) -> bool {
    LINE_ARRAY_KEYS.contains(&key) && value.is_array()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
