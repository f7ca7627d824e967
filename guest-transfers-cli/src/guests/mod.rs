//! Guest records, their workflow status, and the store that owns them
//!
//! Everything in here is free of terminal and browser concerns so it can be
//! driven from the CLI handlers and from tests alike.

pub mod format;
pub mod phone;
pub mod record;
pub mod store;

pub use format::{date_cell, time_cell};
pub use phone::sanitize_phone;
pub use record::{display_value, is_truthy, GuestRecord, GuestStatus};
pub use store::{FileStorage, GuestStore, Notice, SnapshotStorage};
