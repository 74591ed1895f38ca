use crate::domain::repository::EnrollmentRepository;
use crate::domain::types::NewEnrollment;
use crate::error::PortalError;

pub struct EnrollUseCase<R: EnrollmentRepository> {
    pub repo: R,
}

pub struct EnrollInput {
    pub course_id: i32,
    pub name: String,
    pub roll_number: String,
    pub year: String,
}

impl<R: EnrollmentRepository> EnrollUseCase<R> {
    /// The student id comes from the session, never the form. Repeat
    /// enrollments are allowed and create distinct rows.
    pub async fn execute(&self, student_id: i32, input: EnrollInput) -> Result<(), PortalError> {
        self.repo
            .create(&NewEnrollment {
                student_id,
                course_id: input.course_id,
                name: input.name,
                roll_number: input.roll_number,
                year: input.year,
            })
            .await
    }
}
