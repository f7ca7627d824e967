//! Spreadsheet import for guest bookings
//!
//! Only the first sheet is read. Its first row supplies the column names and
//! every following non-blank row becomes one record. Supported formats:
//! xlsx, xlsm, xlsb, xls, ods (via calamine) and csv.

mod reader;

pub use reader::decode_first_sheet_async;
