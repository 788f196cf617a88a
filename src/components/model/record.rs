use serde_json::{Map, Value};

use super::error::ModelError;
use super::row::Row;
use super::schema::RecordSchema;
use super::value_type::FieldValue;

// Shared parse-then-apply step for construction and partial updates.
// Every present property is parsed before any field is written, so a
// type mismatch can never leave a half-updated record behind.
fn apply_json<R: FieldMapped>(
    record: &mut R,
    json: &Value,
    names: Option<&[&str]>,
) -> Result<(), ModelError> {
    let object = match json.as_object() {
        Some(object) => object,
        // A non-object has no properties, so there is nothing to set
        None => return Ok(()),
    };

    let mut parsed = Vec::new();
    for (index, field) in R::schema().fields.iter().enumerate() {
        let name = match names {
            Some(names) => names[index],
            None => field.json_name,
        };
        match object.get(name) {
            // Absent properties and explicit nulls both leave the field unset
            None | Some(Value::Null) => continue,
            Some(value) => parsed.push((index, field.field_type.parse_json(name, value)?)),
        }
    }

    for (index, value) in parsed {
        record.set_field(index, value);
    }
    Ok(())
}

// The field-mapping contract shared by every model type. Implementors
// supply the schema and positional get/set dispatch; everything else
// (JSON construction, masquerading, partial updates, row decoding,
// statement text) is derived from those three.
pub trait FieldMapped: Default {
    fn schema() -> &'static RecordSchema;

    fn get_field(&self, index: usize) -> Option<FieldValue>;

    fn set_field(&mut self, index: usize, value: FieldValue);

    fn column_number() -> usize {
        Self::schema().column_number()
    }

    fn column_name(index: usize) -> Result<&'static str, ModelError> {
        Self::schema().column_name(index)
    }

    fn from_json(json: &Value) -> Result<Self, ModelError> {
        let mut record = Self::default();
        record.update_by_json(json)?;
        Ok(record)
    }

    fn from_masqueraded_json(json: &Value, names: &[&str]) -> Result<Self, ModelError> {
        let mut record = Self::default();
        record.update_by_masqueraded_json(json, names)?;
        Ok(record)
    }

    fn update_by_json(&mut self, json: &Value) -> Result<(), ModelError> {
        apply_json(self, json, None)
    }

    fn update_by_masqueraded_json(&mut self, json: &Value, names: &[&str]) -> Result<(), ModelError> {
        Self::schema().check_masquerade(names)?;
        apply_json(self, json, Some(names))
    }

    fn to_json(&self) -> Value {
        let schema = Self::schema();
        let mut object = Map::new();
        for (index, field) in schema.fields.iter().enumerate() {
            let value = match self.get_field(index) {
                Some(value) => value.to_json(),
                None => Value::Null,
            };
            object.insert(field.json_name.to_string(), value);
        }
        Value::Object(object)
    }

    fn to_masqueraded_json(&self, names: &[&str]) -> Result<Value, ModelError> {
        let schema = Self::schema();
        schema.check_masquerade(names)?;
        let mut object = Map::new();
        for (index, name) in names.iter().enumerate() {
            let value = match self.get_field(index) {
                Some(value) => value.to_json(),
                None => Value::Null,
            };
            object.insert(name.to_string(), value);
        }
        Ok(Value::Object(object))
    }

    fn validate_json_for_creation(json: &Value) -> Result<(), String> {
        Self::schema().validate_json_for_creation(json)
    }

    // Read-path constructor: pull each declared column out of a query
    // result row by name. Missing columns and SQL nulls stay unset.
    fn from_row(row: &Row) -> Result<Self, ModelError> {
        let mut record = Self::default();
        for (index, field) in Self::schema().fields.iter().enumerate() {
            if let Some(value) = row.get(field.column) {
                if !field.field_type.matches_value(value) {
                    return Err(ModelError::TypeMismatch {
                        field: field.column.to_string(),
                        expected: field.field_type.name(),
                        actual: value.type_name().to_string(),
                    });
                }
                record.set_field(index, value.clone());
            }
        }
        Ok(record)
    }

    // Positional variant for rows that are a slice of a wider join result
    fn from_row_offset(row: &Row, offset: usize) -> Result<Self, ModelError> {
        let mut record = Self::default();
        for (index, field) in Self::schema().fields.iter().enumerate() {
            if let Some(value) = row.value_at(offset + index)? {
                if !field.field_type.matches_value(value) {
                    return Err(ModelError::TypeMismatch {
                        field: field.column.to_string(),
                        expected: field.field_type.name(),
                        actual: value.type_name().to_string(),
                    });
                }
                record.set_field(index, value.clone());
            }
        }
        Ok(record)
    }

    fn sql_for_finding_by_primary_key() -> String {
        Self::schema().sql_for_finding_by_primary_key()
    }

    fn sql_for_deleting_by_primary_key() -> String {
        Self::schema().sql_for_deleting_by_primary_key()
    }

    // Insert statement over every declared column. The primary key always
    // binds $1; any other unset column falls back to the database default,
    // in which case the returned flag signals that the stored row holds
    // values the caller never supplied.
    fn sql_for_inserting(&self) -> (String, bool) {
        let schema = Self::schema();
        let columns = schema
            .fields
            .iter()
            .map(|field| field.column)
            .collect::<Vec<_>>()
            .join(", ");

        let mut needs_selection = false;
        let mut placeholder = 0;
        let values = schema
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                if field.column == schema.primary_key || self.get_field(index).is_some() {
                    placeholder += 1;
                    format!("${}", placeholder)
                } else {
                    needs_selection = true;
                    "default".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",");

        (
            format!(
                "insert into {} ({}) values ({})",
                schema.table, columns, values
            ),
            needs_selection,
        )
    }

    // Bound values in placeholder order for sql_for_inserting();
    // None binds SQL null (an unset primary key)
    fn params_for_inserting(&self) -> Vec<Option<FieldValue>> {
        let schema = Self::schema();
        let mut params = Vec::new();
        for (index, field) in schema.fields.iter().enumerate() {
            let value = self.get_field(index);
            if field.column == schema.primary_key {
                params.push(value);
            } else if value.is_some() {
                params.push(value);
            }
        }
        params
    }
}
