//! Output formatting helpers

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// Print serializable data in the requested format.
pub fn print_output<T: Serialize>(data: T, format: OutputFormat) -> Result<()> {
    let json_value = serde_json::to_value(data)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_value)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&json_value)?);
        }
        OutputFormat::Table => {
            print_as_table(&json_value);
        }
    }

    Ok(())
}

fn print_as_table(value: &Value) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let mut table = Table::new();

            if let Value::Object(first) = &items[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                for item in items {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_cell(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in items {
                    table.add_row(vec![format_cell(item)]);
                }
            }

            println!("{table}");
        }
        Value::Array(_) => {
            println!("(no results)");
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["FIELD", "VALUE"]);
            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_cell(val)]);
            }
            println!("{table}");
        }
        _ => {
            println!("{}", format_cell(value));
        }
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_cell_renders_scalars() {
        assert_eq!(format_cell(&json!(null)), "");
        assert_eq!(format_cell(&json!(true)), "true");
        assert_eq!(format_cell(&json!(3)), "3");
        assert_eq!(format_cell(&json!("edge-rules")), "edge-rules");
    }

    #[test]
    fn format_cell_summarizes_containers() {
        assert_eq!(format_cell(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_cell(&json!({"a": 1})), "{1 fields}");
    }
}
