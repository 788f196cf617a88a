use crate::components::model::{
    record::FieldMapped,
    schema::{FieldDef, FieldType, RecordSchema},
    value_type::FieldValue,
};

pub static USER_SCHEMA: RecordSchema = RecordSchema {
    table: "org_chart_user",
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
            column: "username",
            json_name: "username",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: Some(r"^[A-Za-z0-9_]+$"),
        },
        FieldDef {
            column: "password",
            json_name: "password",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: None,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<i64>, // primary key, assigned by the database
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldMapped for User {
    fn schema() -> &'static RecordSchema {
        &USER_SCHEMA
    }

    fn get_field(&self, index: usize) -> Option<FieldValue> {
        match index {
            0 => self.id.map(FieldValue::Int),
            1 => self.username.clone().map(FieldValue::Str),
            2 => self.password.clone().map(FieldValue::Str),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) {
        match (index, value) {
            (0, FieldValue::Int(id)) => self.id = Some(id),
            (1, FieldValue::Str(username)) => self.username = Some(username),
            (2, FieldValue::Str(password)) => self.password = Some(password),
            _ => unreachable!(), // the schema already type-checked the value
        }
    }
}
