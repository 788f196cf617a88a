use serde_json::json;
use tabled::{builder::Builder, settings::Style};

use components::model::db_client::SqlClient;
use components::model::record::FieldMapped;
use components::model::row::Row;
use components::model::value_type::FieldValue;
use components::orgchart::department::Department;
use components::orgchart::job::Job;
use components::orgchart::person::Person;
use components::orgchart::user::User;

mod components;
mod tests;

// Turn a record back into the row shape a driver would return, so the
// in-memory client below can answer lookups
fn to_row<R: FieldMapped>(record: &R) -> Row {
    let mut row = Row::new();
    for (index, field) in R::schema().fields.iter().enumerate() {
        match record.get_field(index) {
            Some(value) => row.set(field.column, value),
            None => row.set_null(field.column),
        }
    }
    row
}

// Minimal in-memory stand-in for the SQL execution layer
struct MemoryClient {
    departments: Vec<Department>,
    jobs: Vec<Job>,
}

impl SqlClient for MemoryClient {
    fn query_rows(&self, sql: &str, params: &[FieldValue]) -> Result<Vec<Row>, String> {
        let key = match params.first().and_then(|p| p.as_int()) {
            Some(key) => key,
            None => return Err("missing key parameter".to_string()),
        };

        if sql.starts_with("select * from org_chart_department") {
            Ok(self
                .departments
                .iter()
                .filter(|d| d.id == Some(key))
                .map(to_row)
                .collect())
        } else if sql.starts_with("select * from org_chart_job") {
            Ok(self
                .jobs
                .iter()
                .filter(|j| j.id == Some(key))
                .map(to_row)
                .collect())
        } else {
            Ok(Vec::new())
        }
    }
}

fn main() {
    println!("\n🚀 Loading the org chart from JSON...");

    let departments = [
        json!({"id": 1, "name": "Engineering"}),
        json!({"id": 2, "name": "Design"}),
    ]
    .iter()
    .map(|j| Department::from_json(j).unwrap())
    .collect::<Vec<_>>();

    let jobs = [
        json!({"id": 1, "title": "CTO"}),
        json!({"id": 2, "title": "Developer"}),
    ]
    .iter()
    .map(|j| Job::from_json(j).unwrap())
    .collect::<Vec<_>>();

    let persons = [
        json!({"id": 1, "jobId": 1, "departmentId": 1, "firstName": "Sabrina", "lastName": "Hill", "hireDate": "2019-03-01"}),
        json!({"id": 2, "jobId": 2, "departmentId": 1, "managerId": 1, "firstName": "Mateo", "lastName": "Ortiz", "hireDate": "2021-11-15"}),
        json!({"id": 3, "jobId": 2, "departmentId": 2, "managerId": 1, "firstName": "Ivy", "lastName": "Chen"}),
    ]
    .iter()
    .map(|j| Person::from_json(j).unwrap())
    .collect::<Vec<_>>();

    println!(
        "✅ Loaded {} departments, {} jobs, {} persons",
        departments.len(),
        jobs.len(),
        persons.len()
    );

    // Creation payloads are validated before any statement is built
    println!("\n🔍 Validating creation payloads...");
    let valid = json!({"firstName": "Test", "lastName": "User"});
    println!("{} -> {:?}", valid, Person::validate_json_for_creation(&valid));
    let invalid = json!({"firstName": "Test"});
    println!("{} -> {:?}", invalid, Person::validate_json_for_creation(&invalid));

    // Job and department names resolve through the client seam
    let client = MemoryClient { departments, jobs };

    println!("\n📊 Person roster:");
    let mut builder = Builder::new();
    builder.push_record(["id", "first name", "last name", "job", "department", "hired"]);
    for person in &persons {
        let job = person.job(&client).unwrap();
        let department = person.department(&client).unwrap();
        builder.push_record([
            person.id.map(|id| id.to_string()).unwrap_or_default(),
            person.first_name.clone().unwrap_or_default(),
            person.last_name.clone().unwrap_or_default(),
            job.and_then(|j| j.title).unwrap_or_default(),
            department.and_then(|d| d.name).unwrap_or_default(),
            person.hire_date.map(|d| d.to_string()).unwrap_or_default(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::ascii());
    println!("{}", table);

    println!("\n🎭 Masqueraded serialization:");
    let user = User::from_json(&json!({"id": 7, "username": "shill", "password": "hunter2"})).unwrap();
    let masqueraded = user
        .to_masqueraded_json(&["user_id", "user_name", "user_pass"])
        .unwrap();
    println!("{}", masqueraded);

    println!("\n📝 Generated statements:");
    println!("{}", Person::sql_for_finding_by_primary_key());
    println!("{}", Person::sql_for_deleting_by_primary_key());
    let (insert, needs_selection) = persons[2].sql_for_inserting();
    println!("{} (needs selection: {})", insert, needs_selection);

    println!("\n✨ Org chart demo completed!");
}
