//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use checkin_core::record::CheckInFields;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One row of the check-in preview table.
#[derive(Debug, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Print the fields of a check-in in the selected format
pub fn print_fields(fields: &CheckInFields, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows = [
                ("hostname", &fields.hostname),
                ("intip", &fields.intip),
                ("extip", &fields.extip),
                ("mydate", &fields.mydate),
                ("note", &fields.note),
            ]
            .into_iter()
            .map(|(field, value)| FieldRow {
                field,
                value: value.clone(),
            });
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => print_json(fields),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => print_json(item),
    }
}

fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
