#[path = "department.rs"]
pub mod department;

#[path = "job.rs"]
pub mod job;

#[path = "person.rs"]
pub mod person;

#[path = "person_info.rs"]
pub mod person_info;

#[path = "user.rs"]
pub mod user;
