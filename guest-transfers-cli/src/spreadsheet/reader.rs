//! Decode the first sheet of a workbook into row records

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};
use serde_json::{Map, Value, json};

/// One decoded row: column name -> cell value, in sheet column order
pub type Row = Map<String, Value>;

/// Header used for columns whose header cell is blank
const EMPTY_HEADER: &str = "__EMPTY";

/// Decode the first sheet of `path`
///
/// CSV files are read with the csv crate, everything else goes through
/// calamine's format detection.
pub fn decode_first_sheet<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let rows = if is_csv {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };

    log::info!("Decoded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Decode on the blocking pool and hand back the single result
pub async fn decode_first_sheet_async(path: PathBuf) -> Result<Vec<Row>> {
    tokio::task::spawn_blocking(move || decode_first_sheet(&path))
        .await
        .context("Spreadsheet decode task failed")?
}

fn read_workbook(path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("Spreadsheet has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    log::debug!("Reading sheet '{}' ({:?})", sheet_name, range.get_size());

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let headers = unique_headers(header_row.iter().map(header_text).collect());

    Ok(rows
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .filter_map(|(header, cell)| cell_to_value(cell).map(|v| (header.clone(), v)))
                .collect::<Row>()
        })
        .filter(|row| !row.is_empty())
        .collect())
}

fn read_csv(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let headers = unique_headers(
        reader
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect(),
    );

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", line + 2))?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, field)| !field.is_empty())
            .map(|(header, field)| (header.clone(), text_to_value(field)))
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => cell_to_value(other)
            .map(|v| crate::guests::display_value(Some(&v)))
            .unwrap_or_default(),
    }
}

/// Make header names unique: blanks become `__EMPTY`, repeats get `_1`, `_2`...
fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    raw.into_iter()
        .map(|header| {
            let base = if header.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                header
            };
            let mut name = base.clone();
            let mut n = 1;
            while seen.contains(&name) {
                name = format!("{}_{}", base, n);
                n += 1;
            }
            seen.insert(name.clone());
            name
        })
        .collect()
}

/// Convert a workbook cell; `None` means the cell is left out of the record
fn cell_to_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(i) => Some(json!(*i)),
        Data::Float(f) => Some(number_value(*f)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        // Keep the raw serial so the date/time formatters can work on it
        Data::DateTime(dt) => Some(number_value(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

/// Whole numbers become integers so phone numbers do not grow a `.0`
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        json!(f as i64)
    } else {
        json!(f)
    }
}

/// CSV fields that look numeric become numbers. Leading zeros are kept as text
/// since they are almost always phone numbers or codes.
fn text_to_value(field: &str) -> Value {
    let trimmed = field.trim();
    let leading_zero = trimmed.len() > 1 && trimmed.starts_with('0') && !trimmed.starts_with("0.");
    if !leading_zero {
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return number_value(f);
            }
        }
    }
    Value::String(field.to_string())
}
