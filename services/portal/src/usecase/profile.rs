use crate::domain::repository::{EnrollmentRepository, StudentRepository};
use crate::domain::types::{EnrollmentRecord, Student};
use crate::error::PortalError;

pub struct StudentProfileUseCase<S: StudentRepository, E: EnrollmentRepository> {
    pub students: S,
    pub enrollments: E,
}

#[derive(Debug)]
pub struct StudentProfileOutput {
    pub student: Student,
    pub enrollments: Vec<EnrollmentRecord>,
}

impl<S: StudentRepository, E: EnrollmentRepository> StudentProfileUseCase<S, E> {
    /// A session whose student row no longer exists is treated like an
    /// expired session and sent back through login.
    pub async fn execute(&self, student_id: i32) -> Result<StudentProfileOutput, PortalError> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or(PortalError::StudentLoginRequired)?;
        let enrollments = self.enrollments.list_for_student(student_id).await?;
        Ok(StudentProfileOutput {
            student,
            enrollments,
        })
    }
}
