//! Guest record representation
//!
//! A record is whatever columns the imported sheet had, kept in sheet order,
//! plus the workflow status the tool tracks for it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key holding the workflow status in a persisted record
pub const STATUS_KEY: &str = "status";

/// Workflow state of a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// Not contacted yet
    #[default]
    Pending,
    /// Message link was opened
    Done,
    /// Phone number missing or unusable
    NoWhatsapp,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Pending => "pending",
            GuestStatus::Done => "done",
            GuestStatus::NoWhatsapp => "no-whatsapp",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(GuestStatus::Pending),
            "done" => Ok(GuestStatus::Done),
            "no-whatsapp" => Ok(GuestStatus::NoWhatsapp),
            other => Err(format!(
                "unknown status '{}' (expected pending, done or no-whatsapp)",
                other
            )),
        }
    }
}

/// One imported booking row plus its workflow status
///
/// Serializes as a flat JSON object: the sheet columns in their original
/// order followed by `"status"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub status: GuestStatus,
}

impl GuestRecord {
    /// Build a freshly imported record. A sheet column named `status` is
    /// replaced by the workflow status.
    pub fn from_row(mut row: Map<String, Value>) -> Self {
        if row.remove(STATUS_KEY).is_some() {
            log::debug!("Dropping sheet column '{}' in favour of workflow status", STATUS_KEY);
        }
        Self {
            fields: row,
            status: GuestStatus::Pending,
        }
    }

    /// Column names in iteration order, ending with the status key
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self.fields.keys().cloned().collect();
        columns.push(STATUS_KEY.to_string());
        columns
    }

    /// Raw cell value for a sheet column
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Cell value rendered as text, empty when absent
    pub fn text(&self, column: &str) -> String {
        if column == STATUS_KEY {
            return self.status.to_string();
        }
        display_value(self.get(column))
    }
}

/// JavaScript-style truthiness of a cell value
///
/// Absent, null, `false`, zero, NaN and the empty string are all falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a cell value the way a browser would put it into a text node
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_number).unwrap_or_default()
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Whole floats print without a fractional part (`201001234567.0` -> `201001234567`)
fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{:.0}", f)
    } else {
        format!("{}", f)
    }
}
