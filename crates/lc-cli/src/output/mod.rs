use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a list of records in the requested format.
///
/// Tables show `columns` in the given order; other fields are left out.
pub fn render_list<T: Serialize>(
    items: &[T],
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Raw => Ok(serde_json::to_string(items)?),
        OutputFormat::Table => {
            if items.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                let value = serde_json::to_value(item)?;
                rows.push(
                    columns
                        .iter()
                        .map(|column| value.get(*column).map_or_else(|| String::from("-"), value_to_cell))
                        .collect(),
                );
            }
            Ok(table::render_table(columns, &rows, options))
        }
    }
}

/// Print a list of records in the requested format.
pub fn output_list<T: Serialize>(
    items: &[T],
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_list(items, columns, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a status line for the user unless `--quiet` is set.
pub fn message(text: impl std::fmt::Display) {
    if !ui::prefs().quiet {
        println!("{text}");
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}
