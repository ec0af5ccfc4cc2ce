use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// ISO 8601 without timezone, the way the table and plotly.js expect dates.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Infer a cell from raw text, the way CSV sources are read.
    ///
    /// Integers win over floats, `True`/`False` become booleans, empty cells
    /// are missing values. Anything else stays a string, dates included.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return CellValue::Integer(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return CellValue::Float(value);
        }
        match trimmed {
            "True" | "TRUE" | "true" => CellValue::Boolean(true),
            "False" | "FALSE" | "false" => CellValue::Boolean(false),
            _ => CellValue::String(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Boolean(value) => write!(f, "{}", value),
            CellValue::String(value) => write!(f, "{}", value),
            CellValue::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Integer(value) => serializer.serialize_i64(*value),
            // JSON has no NaN
            CellValue::Float(value) if !value.is_finite() => serializer.serialize_none(),
            CellValue::Float(value) => serializer.serialize_f64(*value),
            CellValue::Boolean(value) => serializer.serialize_bool(*value),
            CellValue::String(value) => serializer.serialize_str(value),
            CellValue::DateTime(value) => {
                serializer.collect_str(&value.format(DATETIME_FORMAT))
            }
        }
    }
}
