use crate::components::model::{
    db_client::{find_all_related, SqlClient},
    error::ModelError,
    record::FieldMapped,
    schema::{FieldDef, FieldType, RecordSchema},
    value_type::FieldValue,
};

use super::person::Person;

pub static JOB_SCHEMA: RecordSchema = RecordSchema {
    table: "org_chart_job",
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
            column: "title",
            json_name: "title",
            field_type: FieldType::String,
            required: true,
            max_length: Some(50),
            pattern: None,
        },
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    pub id: Option<i64>, // primary key, assigned by the database
    pub title: Option<String>,
}

impl Job {
    // Every person currently holding this job
    pub fn persons<C: SqlClient>(&self, client: &C) -> Result<Vec<Person>, ModelError> {
        find_all_related(client, "job_id", self.id)
    }
}

impl FieldMapped for Job {
    fn schema() -> &'static RecordSchema {
        &JOB_SCHEMA
    }

    fn get_field(&self, index: usize) -> Option<FieldValue> {
        match index {
            0 => self.id.map(FieldValue::Int),
            1 => self.title.clone().map(FieldValue::Str),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) {
        match (index, value) {
            (0, FieldValue::Int(id)) => self.id = Some(id),
            (1, FieldValue::Str(title)) => self.title = Some(title),
            _ => unreachable!(), // the schema already type-checked the value
        }
    }
}
