//! Machine-readable table output

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::TableView;

/// Rows as JSON objects keyed by header, in header order
pub fn table_to_json(table: &TableView) -> Value {
    Value::Array(
        table
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .headers
                    .iter()
                    .zip(&row.cells)
                    .map(|(header, cell)| (header.clone(), Value::String(cell.text())))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}

pub fn format_json(table: &TableView) -> Result<String> {
    serde_json::to_string_pretty(&table_to_json(table)).context("Failed to format JSON output")
}

/// Header line plus one line per row
pub fn format_csv(table: &TableView) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&table.headers)
        .context("Failed to write CSV header")?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|c| c.text()))
            .context("Failed to write CSV row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::GuestRecord;
    use crate::render::render_table;
    use serde_json::json;

    fn table() -> TableView {
        let guests = vec![GuestRecord::from_row(
            json!({"Name": "Ana, Jr.", "Time": 0.5})
                .as_object()
                .cloned()
                .unwrap(),
        )];
        render_table(&guests).unwrap()
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            table_to_json(&table()),
            json!([{"Name": "Ana, Jr.", "Time": "12:00", "status": "pending", "Action": "send 1"}])
        );
    }

    #[test]
    fn test_csv_output_escapes() {
        let csv = format_csv(&table()).unwrap();
        assert_eq!(csv, "Name,Time,status,Action\n\"Ana, Jr.\",12:00,pending,send 1\n");
    }
}
