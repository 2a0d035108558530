use serde_json::Value;
use tabled::builder::Builder;
use umdio_api::ApiResult;

pub enum OutputFormat {
    Json,
    Table,
}

/// Prints a result in the requested format. Empty results only print a
/// notice on stderr.
pub fn print_result(result: &ApiResult, format: &OutputFormat) {
    let Some(value) = result.as_value() else {
        eprintln!("No results.");
        return;
    };
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => match render_table(value) {
            Some(table) => println!("{}", table),
            None => print_json(value),
        },
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Table output --

/// Renders a list of objects (one column per key) or a list of scalars (a
/// single column). A lone object becomes a one-row table. Anything else,
/// including mixed lists, yields `None`.
fn render_table(value: &Value) -> Option<String> {
    let rows: Vec<&Value> = match value {
        Value::Array(items) if !items.is_empty() => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => return None,
    };

    let mut builder = Builder::default();
    if rows.iter().all(|row| row.is_object()) {
        let mut columns: Vec<String> = Vec::new();
        for row in rows.iter().filter_map(|row| row.as_object()) {
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        builder.push_record(columns.clone());
        for row in &rows {
            builder.push_record(columns.iter().map(|column| format_cell(row.get(column))));
        }
    } else if rows.iter().all(|row| !row.is_object() && !row.is_array()) {
        builder.push_record(vec!["value".to_string()]);
        for row in &rows {
            builder.push_record(vec![format_cell(Some(row))]);
        }
    } else {
        return None;
    }
    Some(builder.build().to_string())
}

/// Strings print bare, nested values as compact JSON, and missing or null
/// values as an empty cell.
fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
