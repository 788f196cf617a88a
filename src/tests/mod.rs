#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::components::model::row::Row;
use crate::components::model::value_type::{FieldValue, DATE_FORMAT};

mod department;
mod person;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
}

// A JSON payload covering every Person field under default names
pub fn sample_person_json() -> Value {
    json!({
        "id": 1,
        "jobId": 2,
        "departmentId": 3,
        "managerId": 4,
        "firstName": "John",
        "lastName": "Doe",
        "hireDate": "2024-01-01"
    })
}

pub const PERSON_MASQUERADE: [&str; 7] = [
    "person_id",
    "person_jobId",
    "person_departmentId",
    "person_managerId",
    "person_firstName",
    "person_lastName",
    "person_hireDate",
];

// A person_info row as the view would return it
pub fn sample_person_info_row() -> Row {
    let mut row = Row::new();
    row.set("id", FieldValue::Int(123));
    row.set("job_id", FieldValue::Int(456));
    row.set("job_title", FieldValue::Str("Manager".to_string()));
    row.set("department_id", FieldValue::Int(789));
    row.set("department_name", FieldValue::Str("Engineering".to_string()));
    row.set("manager_id", FieldValue::Int(101112));
    row.set("manager_full_name", FieldValue::Str("John Doe".to_string()));
    row.set("first_name", FieldValue::Str("Alice".to_string()));
    row.set("last_name", FieldValue::Str("Smith".to_string()));
    row.set("hire_date", FieldValue::Date(date("2022-05-01")));
    row
}
