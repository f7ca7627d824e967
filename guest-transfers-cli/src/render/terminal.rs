//! Colored terminal table

use colored::*;
use unicode_width::UnicodeWidthStr;

use super::{RowMarker, TableView};

const COLUMN_GAP: &str = "  ";

/// Lay out the table as aligned text; handled rows are tinted by marker
pub fn format_table(table: &TableView) -> String {
    let texts: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|c| c.text()).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            texts
                .iter()
                .filter_map(|row| row.get(col))
                .map(|t| t.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let header_line = join_padded(&table.headers, &widths);
    out.push_str(&header_line.bold().to_string());
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .dimmed()
            .to_string(),
    );
    out.push('\n');

    for (row, cells) in table.rows.iter().zip(&texts) {
        let line = join_padded(cells, &widths);
        let line = match row.marker {
            Some(RowMarker::Done) => line.green(),
            Some(RowMarker::NoWhatsapp) => line.red(),
            None => line.normal(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }

    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(text, width)| pad(text, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// Pad by display width so wide characters line up
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
