#![allow(unused_imports)]

use serde_json::json;

use crate::components::model::record::FieldMapped;
use crate::components::orgchart::department::Department;

#[test]
fn test_basic_field_access() {
    let mut dept = Department::default();
    dept.id = Some(101);
    dept.name = Some("Computer Science".to_string());

    assert_eq!(dept.id, Some(101));
    assert_eq!(dept.name.as_deref(), Some("Computer Science"));
}

#[test]
fn test_to_json_conversion() {
    let mut dept = Department::default();
    dept.id = Some(202);
    dept.name = Some("Mechanical".to_string());

    let json = dept.to_json();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("id"));
    assert!(object.contains_key("name"));
    assert_eq!(json["id"], 202);
    assert_eq!(json["name"], "Mechanical");
}

#[test]
fn test_construction_from_json() {
    let dept = Department::from_json(&json!({"id": 303, "name": "Electrical"})).unwrap();

    assert_eq!(dept.id, Some(303));
    assert_eq!(dept.name.as_deref(), Some("Electrical"));
}

#[test]
fn test_validate_json_for_creation_without_id() {
    // id is assigned by the database, only the name is needed
    let json = json!({"name": "Civil"});

    assert_eq!(Department::validate_json_for_creation(&json), Ok(()));
}

#[test]
fn test_json_round_trip() {
    let json = json!({"id": 7, "name": "Research"});
    let dept = Department::from_json(&json).unwrap();

    assert_eq!(dept.to_json(), json);
}
