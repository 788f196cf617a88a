use crate::components::model::{
    db_client::{find_all_related, SqlClient},
    error::ModelError,
    record::FieldMapped,
    schema::{FieldDef, FieldType, RecordSchema},
    value_type::FieldValue,
};

use super::person::Person;

pub static DEPARTMENT_SCHEMA: RecordSchema = RecordSchema {
    table: "org_chart_department",
    primary_key: "id",
    fields: &[
        FieldDef {
            column: "id",
            json_name: "id",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "name",
            json_name: "name",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: None,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Department {
    pub id: Option<i64>, // primary key, assigned by the database
    pub name: Option<String>,
}

impl Department {
    // Every person assigned to this department
    pub fn persons<C: SqlClient>(&self, client: &C) -> Result<Vec<Person>, ModelError> {
        find_all_related(client, "department_id", self.id)
    }
}

impl FieldMapped for Department {
    fn schema() -> &'static RecordSchema {
        &DEPARTMENT_SCHEMA
    }

    fn get_field(&self, index: usize) -> Option<FieldValue> {
        match index {
            0 => self.id.map(FieldValue::Int),
            1 => self.name.clone().map(FieldValue::Str),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) {
        match (index, value) {
            (0, FieldValue::Int(id)) => self.id = Some(id),
            (1, FieldValue::Str(name)) => self.name = Some(name),
            _ => unreachable!(), // the schema already type-checked the value
        }
    }
}
