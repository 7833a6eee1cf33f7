pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Route a result envelope to the formatter the user picked with `--output`.
pub fn format_output(format: &OutputFormat, envelope: &Value) {
    match format {
        OutputFormat::Json => json::print_json(envelope),
        OutputFormat::Table => table::print_table(envelope),
        OutputFormat::Csv => csv_out::print_csv(envelope),
        OutputFormat::Minimal => minimal::print_minimal(envelope),
    }
}
