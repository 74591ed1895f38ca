pub mod course;
pub mod enroll;
pub mod login;
pub mod profile;
pub mod register;
pub mod stats;
