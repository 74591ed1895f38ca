//! HTTP handlers. GET handlers render JSON view models (the `view`
//! field names the page) and consume any pending flash notice; POST
//! handlers run a usecase and redirect with a fresh notice.

pub mod admin;
pub mod session;
pub mod student;

use serde::Serialize;

use crate::domain::types::Course;

#[derive(Debug, Serialize)]
pub struct CourseView {
    pub id: i32,
    pub name: String,
    pub duration: String,
    pub company_name: String,
}

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            duration: course.duration,
            company_name: course.company_name,
        }
    }
}
