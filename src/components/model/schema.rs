use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::error::ModelError;
use super::value_type::{FieldValue, DATE_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Integer,
    String,
    Date,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::String => "string",
            FieldType::Date => "date",
        }
    }

    pub fn matches_value(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldType::Integer, FieldValue::Int(_))
                | (FieldType::String, FieldValue::Str(_))
                | (FieldType::Date, FieldValue::Date(_))
        )
    }

    // Extract a typed value from a JSON property. Dates travel as
    // ISO strings, so an unparseable date counts as a type mismatch.
    pub fn parse_json(&self, field: &str, value: &Value) -> Result<FieldValue, ModelError> {
        let parsed = match self {
            FieldType::Integer => value.as_i64().map(FieldValue::Int),
            FieldType::String => value.as_str().map(|s| FieldValue::Str(s.to_string())),
            FieldType::Date => value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
                .map(FieldValue::Date),
        };

        parsed.ok_or_else(|| ModelError::TypeMismatch {
            field: field.to_string(),
            expected: self.name(),
            actual: json_kind(value).to_string(),
        })
    }
}

// Human-readable label for a JSON value's shape, used in error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub column: &'static str,          // column name in the table
    pub json_name: &'static str,       // default property name in JSON payloads
    pub field_type: FieldType,         // scalar type of the column
    pub required: bool,                // must be present when creating a new row
    pub max_length: Option<usize>,     // varchar limit for string columns
    pub pattern: Option<&'static str>, // regex the string value must match
}

impl FieldDef {
    // Constraint checks on a value already known to exist, mirroring
    // what the database would reject at insert time
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if !self.field_type.matches_value(value) {
            return Err(format!(
                "type error in the {} field: expected {}, got {}",
                self.json_name,
                self.field_type.name(),
                value.type_name()
            ));
        }

        if let FieldValue::Str(s) = value {
            if let Some(max) = self.max_length {
                if s.chars().count() > max {
                    return Err(format!(
                        "the {} field exceeds the maximum length of {}",
                        self.json_name, max
                    ));
                }
            }
            if let Some(pattern) = self.pattern {
                let matched = Regex::new(pattern)
                    .map_err(|e| format!("invalid pattern for the {} field: {}", self.json_name, e))?
                    .is_match(s);
                if !matched {
                    return Err(format!(
                        "the {} field does not match the pattern {}",
                        self.json_name, pattern
                    ));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordSchema {
    pub table: &'static str,         // configured table (or view) name
    pub primary_key: &'static str,   // column the key-based statements filter on
    pub fields: &'static [FieldDef], // declaration order is column order
}

impl RecordSchema {
    pub fn column_number(&self) -> usize {
        self.fields.len()
    }

    pub fn column_name(&self, index: usize) -> Result<&'static str, ModelError> {
        match self.fields.get(index) {
            Some(field) => Ok(field.column),
            None => Err(ModelError::ColumnOutOfRange {
                index,
                count: self.fields.len(),
            }),
        }
    }

    // A masquerading vector must rename every column, positionally
    pub fn check_masquerade(&self, names: &[&str]) -> Result<(), ModelError> {
        if names.len() != self.fields.len() {
            warn!(
                "bad masquerading vector for table '{}': {} names for {} columns",
                self.table,
                names.len(),
                self.fields.len()
            );
            return Err(ModelError::BadMasqueradingVector {
                expected: self.fields.len(),
                got: names.len(),
            });
        }
        Ok(())
    }

    pub fn sql_for_finding_by(&self, column: &str) -> String {
        format!("select * from {} where {} = $1", self.table, column)
    }

    pub fn sql_for_finding_by_primary_key(&self) -> String {
        self.sql_for_finding_by(self.primary_key)
    }

    pub fn sql_for_deleting_by_primary_key(&self) -> String {
        format!(
            "delete from {} where {} = $1",
            self.table, self.primary_key
        )
    }

    // Creation-path validation: required fields present, every present
    // field type-correct and within its constraints. The failure message
    // is meant for user-facing feedback, hence Result<(), String>.
    pub fn validate_json_for_creation(&self, json: &Value) -> Result<(), String> {
        for field in self.fields {
            let value = match json.get(field.json_name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(format!(
                            "the {} field cannot be null when creating a new record",
                            field.json_name
                        ));
                    }
                    continue;
                }
                Some(value) => value,
            };

            let parsed = field.field_type.parse_json(field.json_name, value).map_err(|_| {
                format!(
                    "type error in the {} field: expected {}, got {}",
                    field.json_name,
                    field.field_type.name(),
                    json_kind(value)
                )
            })?;

            field.validate(&parsed)?;
        }

        Ok(())
    }
}
