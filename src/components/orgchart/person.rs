use chrono::NaiveDate;

use crate::components::model::{
    db_client::{find_related, SqlClient},
    error::ModelError,
    record::FieldMapped,
    schema::{FieldDef, FieldType, RecordSchema},
    value_type::FieldValue,
};

use super::department::Department;
use super::job::Job;

// Columns are snake_case in the table while the JSON payloads of the
// org-chart API use camelCase property names
pub static PERSON_SCHEMA: RecordSchema = RecordSchema {
    table: "org_chart_person",
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
            json_name: "jobId",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "department_id",
            json_name: "departmentId",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "manager_id",
            json_name: "managerId",
            field_type: FieldType::Integer,
            required: false,
            max_length: None,
            pattern: None,
        },
        FieldDef {
            column: "first_name",
            json_name: "firstName",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: None,
        },
        FieldDef {
            column: "last_name",
            json_name: "lastName",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: None,
        },
        FieldDef {
            column: "hire_date",
            json_name: "hireDate",
            field_type: FieldType::Date,
            required: false,
            max_length: None,
            pattern: None,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub id: Option<i64>, // primary key, assigned by the database
    pub job_id: Option<i64>,
    pub department_id: Option<i64>,
    pub manager_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

impl Person {
    pub fn department<C: SqlClient>(&self, client: &C) -> Result<Option<Department>, ModelError> {
        find_related(client, self.department_id)
    }

    pub fn job<C: SqlClient>(&self, client: &C) -> Result<Option<Job>, ModelError> {
        find_related(client, self.job_id)
    }

    pub fn manager<C: SqlClient>(&self, client: &C) -> Result<Option<Person>, ModelError> {
        find_related(client, self.manager_id)
    }
}

impl FieldMapped for Person {
    fn schema() -> &'static RecordSchema {
        &PERSON_SCHEMA
    }

    fn get_field(&self, index: usize) -> Option<FieldValue> {
        match index {
            0 => self.id.map(FieldValue::Int),
            1 => self.job_id.map(FieldValue::Int),
            2 => self.department_id.map(FieldValue::Int),
            3 => self.manager_id.map(FieldValue::Int),
            4 => self.first_name.clone().map(FieldValue::Str),
            5 => self.last_name.clone().map(FieldValue::Str),
            6 => self.hire_date.map(FieldValue::Date),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) {
        match (index, value) {
            (0, FieldValue::Int(id)) => self.id = Some(id),
            (1, FieldValue::Int(job_id)) => self.job_id = Some(job_id),
            (2, FieldValue::Int(department_id)) => self.department_id = Some(department_id),
            (3, FieldValue::Int(manager_id)) => self.manager_id = Some(manager_id),
            (4, FieldValue::Str(first_name)) => self.first_name = Some(first_name),
            (5, FieldValue::Str(last_name)) => self.last_name = Some(last_name),
            (6, FieldValue::Date(hire_date)) => self.hire_date = Some(hire_date),
            _ => unreachable!(), // the schema already type-checked the value
        }
    }
}
