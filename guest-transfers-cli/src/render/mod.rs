//! Table projection of the guest list
//!
//! [`render_table`] is a pure function from the store's records to a view
//! model. The terminal, JSON and CSV outputs in the submodules only consume
//! that model, so everything interesting here is testable without a terminal.

pub mod export;
pub mod terminal;

use crate::guests::{date_cell, is_truthy, time_cell, GuestRecord, GuestStatus};

/// Synthetic trailing column holding the per-row send action
pub const ACTION_COLUMN: &str = "Action";
pub const DATE_COLUMN: &str = "Date";
pub const TIME_COLUMN: &str = "Time";

/// Rendered table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
}

/// One rendered guest row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Position in the guest list
    pub index: usize,
    pub status: GuestStatus,
    pub marker: Option<RowMarker>,
    pub cells: Vec<CellView>,
}

/// Visual marker for rows that have been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    Done,
    NoWhatsapp,
}

impl RowMarker {
    pub fn for_status(status: GuestStatus) -> Option<Self> {
        match status {
            GuestStatus::Pending => None,
            GuestStatus::Done => Some(RowMarker::Done),
            GuestStatus::NoWhatsapp => Some(RowMarker::NoWhatsapp),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    Text(String),
    /// Send button bound to the guest at `index`
    Action { index: usize },
}

impl CellView {
    /// Plain-text form used by every output
    pub fn text(&self) -> String {
        match self {
            CellView::Text(s) => s.clone(),
            CellView::Action { index } => action_label(*index),
        }
    }
}

/// Command hint for the send action of a row (rows are 1-based on the CLI)
pub fn action_label(index: usize) -> String {
    format!("send {}", index + 1)
}

/// Render the whole guest list
///
/// The first record alone defines the columns; keys that only appear in later
/// records are not shown. Returns `None` for an empty list since there is no
/// record to take headers from.
pub fn render_table(guests: &[GuestRecord]) -> Option<TableView> {
    let first = guests.first()?;

    let mut headers = first.columns();
    headers.push(ACTION_COLUMN.to_string());

    let rows = guests
        .iter()
        .enumerate()
        .map(|(index, guest)| RowView {
            index,
            status: guest.status,
            marker: RowMarker::for_status(guest.status),
            cells: headers
                .iter()
                .map(|column| render_cell(guest, index, column))
                .collect(),
        })
        .collect();

    Some(TableView { headers, rows })
}

fn render_cell(guest: &GuestRecord, index: usize, column: &str) -> CellView {
    let value = guest.get(column);
    match column {
        ACTION_COLUMN => CellView::Action { index },
        DATE_COLUMN if is_truthy(value) => {
            CellView::Text(value.map(date_cell).unwrap_or_default())
        }
        TIME_COLUMN if is_truthy(value) => {
            CellView::Text(value.map(time_cell).unwrap_or_default())
        }
        _ => CellView::Text(guest.text(column)),
    }
}

impl TableView {
    /// Keep only rows with the given status; headers are unchanged
    pub fn retain_status(&mut self, status: GuestStatus) {
        self.rows.retain(|row| row.status == status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn guests(value: Value) -> Vec<GuestRecord> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| GuestRecord::from_row(v.as_object().cloned().unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_list_has_no_table() {
        assert_eq!(render_table(&[]), None);
    }

    #[test]
    fn test_headers_come_from_first_record() {
        let list = guests(json!([
            {"Name": "Ana", "Phone": "201001234567"},
            {"Name": "Ben", "Phone": "201001234568", "Flight": "MS985"}
        ]));
        let table = render_table(&list).unwrap();

        assert_eq!(table.headers, vec!["Name", "Phone", "status", "Action"]);
        assert!(table.rows.iter().all(|r| r.cells.len() == 4));
        assert!(
            !table.rows[1]
                .cells
                .iter()
                .any(|c| c.text() == "MS985")
        );
    }

    #[test]
    fn test_cells_are_formatted() {
        let list = guests(json!([
            {"Name": "Ana", "Date": 45726, "Time": 0.5, "Note": null}
        ]));
        let table = render_table(&list).unwrap();
        let texts: Vec<String> = table.rows[0].cells.iter().map(CellView::text).collect();

        assert_eq!(
            texts,
            vec!["Ana", "Monday, March 10, 2025", "12:00", "", "pending", "send 1"]
        );
        assert_eq!(table.rows[0].cells[5], CellView::Action { index: 0 });
    }

    #[test]
    fn test_falsy_date_and_time_render_raw() {
        let list = guests(json!([{"Date": "", "Time": 0}]));
        let table = render_table(&list).unwrap();
        assert_eq!(table.rows[0].cells[0].text(), "");
        assert_eq!(table.rows[0].cells[1].text(), "0");
    }

    #[test]
    fn test_missing_cell_renders_empty() {
        let list = guests(json!([
            {"Name": "Ana", "Phone": "1"},
            {"Name": "Ben"}
        ]));
        let table = render_table(&list).unwrap();
        assert_eq!(table.rows[1].cells[1].text(), "");
    }

    #[test]
    fn test_row_markers() {
        let mut list = guests(json!([{"Name": "A"}, {"Name": "B"}, {"Name": "C"}]));
        list[1].status = GuestStatus::Done;
        list[2].status = GuestStatus::NoWhatsapp;

        let table = render_table(&list).unwrap();
        let markers: Vec<Option<RowMarker>> = table.rows.iter().map(|r| r.marker).collect();
        assert_eq!(markers, vec![None, Some(RowMarker::Done), Some(RowMarker::NoWhatsapp)]);
        assert_eq!(table.rows[1].cells[1].text(), "done");
    }

    #[test]
    fn test_render_is_idempotent() {
        let list = guests(json!([
            {"Name": "Ana", "Date": 45726, "Time": 0.5},
            {"Name": "Ben", "Date": 45727, "Time": 0.75}
        ]));
        assert_eq!(render_table(&list), render_table(&list));
    }

    #[test]
    fn test_retain_status_keeps_headers_and_indexes() {
        let mut list = guests(json!([{"Name": "A"}, {"Name": "B"}]));
        list[1].status = GuestStatus::Done;

        let mut table = render_table(&list).unwrap();
        table.retain_status(GuestStatus::Done);

        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].index, 1);
    }
}
