#![allow(unused_imports)]

use serde_json::json;

use crate::components::model::record::FieldMapped;
use crate::components::orgchart::person::Person;
use crate::tests::{date, sample_person_json, PERSON_MASQUERADE};

#[test]
fn test_default_person_has_no_fields_set() {
    let person = Person::default();

    assert_eq!(person.id, None);
    assert_eq!(person.job_id, None);
    assert_eq!(person.department_id, None);
    assert_eq!(person.manager_id, None);
    assert_eq!(person.first_name, None);
    assert_eq!(person.last_name, None);
    assert_eq!(person.hire_date, None);
}

#[test]
fn test_construction_from_json() {
    let person = Person::from_json(&sample_person_json()).unwrap();

    assert_eq!(person.id, Some(1));
    assert_eq!(person.job_id, Some(2));
    assert_eq!(person.department_id, Some(3));
    assert_eq!(person.manager_id, Some(4));
    assert_eq!(person.first_name.as_deref(), Some("John"));
    assert_eq!(person.last_name.as_deref(), Some("Doe"));
    assert_eq!(person.hire_date, Some(date("2024-01-01")));
}

#[test]
fn test_construction_from_masqueraded_json() {
    let json = json!({
        "person_id": 10,
        "person_jobId": 20,
        "person_departmentId": 30,
        "person_managerId": 40,
        "person_firstName": "Alice",
        "person_lastName": "Smith",
        "person_hireDate": "2023-06-15"
    });

    let person = Person::from_masqueraded_json(&json, &PERSON_MASQUERADE).unwrap();

    assert_eq!(person.id, Some(10));
    assert_eq!(person.job_id, Some(20));
    assert_eq!(person.department_id, Some(30));
    assert_eq!(person.manager_id, Some(40));
    assert_eq!(person.first_name.as_deref(), Some("Alice"));
    assert_eq!(person.last_name.as_deref(), Some("Smith"));
    assert_eq!(person.hire_date, Some(date("2023-06-15")));
}

#[test]
fn test_field_assignment() {
    let mut person = Person::default();
    person.id = Some(5);
    person.job_id = Some(6);
    person.department_id = Some(7);
    person.manager_id = Some(8);
    person.first_name = Some("Foo".to_string());
    person.last_name = Some("Bar".to_string());
    person.hire_date = Some(date("2025-12-31"));

    assert_eq!(person.id, Some(5));
    assert_eq!(person.job_id, Some(6));
    assert_eq!(person.department_id, Some(7));
    assert_eq!(person.manager_id, Some(8));
    assert_eq!(person.first_name.as_deref(), Some("Foo"));
    assert_eq!(person.last_name.as_deref(), Some("Bar"));
    assert_eq!(person.hire_date, Some(date("2025-12-31")));
}

#[test]
fn test_to_json_serialization() {
    let mut person = Person::default();
    person.id = Some(1);
    person.job_id = Some(2);
    person.department_id = Some(3);
    person.manager_id = Some(4);
    person.first_name = Some("John".to_string());
    person.last_name = Some("Doe".to_string());
    person.hire_date = Some(date("2022-05-01"));

    let json = person.to_json();

    assert_eq!(json["id"], 1);
    assert_eq!(json["jobId"], 2);
    assert_eq!(json["departmentId"], 3);
    assert_eq!(json["managerId"], 4);
    assert_eq!(json["firstName"], "John");
    assert_eq!(json["lastName"], "Doe");
    assert_eq!(json["hireDate"], "2022-05-01");
}

#[test]
fn test_to_masqueraded_json_serialization() {
    let mut person = Person::default();
    person.id = Some(1);
    person.job_id = Some(2);
    person.department_id = Some(3);
    person.manager_id = Some(4);
    person.first_name = Some("Masq".to_string());
    person.last_name = Some("User".to_string());
    person.hire_date = Some(date("2022-10-01"));

    let names = ["id", "jobId", "departmentId", "managerId", "firstName", "lastName", "hireDate"];
    let json = person.to_masqueraded_json(&names).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["jobId"], 2);
    assert_eq!(json["departmentId"], 3);
    assert_eq!(json["managerId"], 4);
    assert_eq!(json["firstName"], "Masq");
    assert_eq!(json["lastName"], "User");
    assert_eq!(json["hireDate"], "2022-10-01");
}

#[test]
fn test_update_by_json_is_partial() {
    let mut person = Person::from_json(&sample_person_json()).unwrap();

    person
        .update_by_json(&json!({"id": 9, "firstName": "Updated"}))
        .unwrap();

    assert_eq!(person.id, Some(9));
    assert_eq!(person.first_name.as_deref(), Some("Updated"));
    // Everything absent from the update payload stays as it was
    assert_eq!(person.job_id, Some(2));
    assert_eq!(person.department_id, Some(3));
    assert_eq!(person.manager_id, Some(4));
    assert_eq!(person.last_name.as_deref(), Some("Doe"));
    assert_eq!(person.hire_date, Some(date("2024-01-01")));
}

#[test]
fn test_validate_json_for_creation_accepts_minimal_payload() {
    let json = json!({"firstName": "Test", "lastName": "User"});

    assert_eq!(Person::validate_json_for_creation(&json), Ok(()));
}

#[test]
fn test_json_round_trip() {
    let json = sample_person_json();
    let person = Person::from_json(&json).unwrap();

    assert_eq!(person.to_json(), json);
}

#[test]
fn test_masqueraded_json_round_trip() {
    let json = json!({
        "person_id": 10,
        "person_jobId": 20,
        "person_departmentId": 30,
        "person_managerId": 40,
        "person_firstName": "Alice",
        "person_lastName": "Smith",
        "person_hireDate": "2023-06-15"
    });

    let person = Person::from_masqueraded_json(&json, &PERSON_MASQUERADE).unwrap();

    assert_eq!(person.to_masqueraded_json(&PERSON_MASQUERADE).unwrap(), json);
}

#[test]
fn test_unset_fields_serialize_as_null() {
    let mut person = Person::default();
    person.first_name = Some("Solo".to_string());

    let json = person.to_json();

    assert_eq!(json["firstName"], "Solo");
    assert!(json["id"].is_null());
    assert!(json["hireDate"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 7, "every column serializes");
}
