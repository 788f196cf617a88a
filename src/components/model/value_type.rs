use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Wire format for date fields, both in JSON payloads and in SQL rows
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Str(_) => "string",
            FieldValue::Date(_) => "date",
        }
    }

    // Convert into the JSON representation used by to_json()
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Str(s) => Value::from(s.clone()),
            FieldValue::Date(d) => Value::from(d.format(DATE_FORMAT).to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}
