use chrono::NaiveDate;

use crate::components::model::{
    record::FieldMapped,
    schema::{FieldDef, FieldType, RecordSchema},
    value_type::FieldValue,
};

// Read-path projection over the person_info view: a person joined with
// the matching job, department and manager rows. Never inserted or
// updated, only decoded from query results; its JSON names follow the
// view's snake_case columns.
pub static PERSON_INFO_SCHEMA: RecordSchema = RecordSchema {
    table: "person_info",
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
            column: "job_id",
            json_name: "job_id",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "job_title",
            json_name: "job_title",
            field_type: FieldType::String,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "department_id",
            json_name: "department_id",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "department_name",
            json_name: "department_name",
            field_type: FieldType::String,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "manager_id",
            json_name: "manager_id",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "manager_full_name",
            json_name: "manager_full_name",
            field_type: FieldType::String,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "first_name",
            json_name: "first_name",
            field_type: FieldType::String,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "last_name",
            json_name: "last_name",
            field_type: FieldType::String,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "hire_date",
            json_name: "hire_date",
            field_type: FieldType::Date,
            required: false,
            max_length: None,
            pattern: None,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInfo {
    pub id: Option<i64>,
    pub job_id: Option<i64>,
    pub job_title: Option<String>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub manager_id: Option<i64>,
    pub manager_full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

impl FieldMapped for PersonInfo {
    fn schema() -> &'static RecordSchema {
        &PERSON_INFO_SCHEMA
    }

    fn get_field(&self, index: usize) -> Option<FieldValue> {
        match index {
            0 => self.id.map(FieldValue::Int),
            1 => self.job_id.map(FieldValue::Int),
            2 => self.job_title.clone().map(FieldValue::Str),
            3 => self.department_id.map(FieldValue::Int),
            4 => self.department_name.clone().map(FieldValue::Str),
            5 => self.manager_id.map(FieldValue::Int),
            6 => self.manager_full_name.clone().map(FieldValue::Str),
            7 => self.first_name.clone().map(FieldValue::Str),
            8 => self.last_name.clone().map(FieldValue::Str),
            9 => self.hire_date.map(FieldValue::Date),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) {
        match (index, value) {
            (0, FieldValue::Int(id)) => self.id = Some(id),
            (1, FieldValue::Int(job_id)) => self.job_id = Some(job_id),
            (2, FieldValue::Str(job_title)) => self.job_title = Some(job_title),
            (3, FieldValue::Int(department_id)) => self.department_id = Some(department_id),
            (4, FieldValue::Str(department_name)) => self.department_name = Some(department_name),
            (5, FieldValue::Int(manager_id)) => self.manager_id = Some(manager_id),
            (6, FieldValue::Str(manager_full_name)) => {
                self.manager_full_name = Some(manager_full_name)
            }
            (7, FieldValue::Str(first_name)) => self.first_name = Some(first_name),
            (8, FieldValue::Str(last_name)) => self.last_name = Some(last_name),
            (9, FieldValue::Date(hire_date)) => self.hire_date = Some(hire_date),
            _ => unreachable!(), // the schema already type-checked the value
        }
    }
}
