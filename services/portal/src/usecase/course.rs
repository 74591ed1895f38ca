use crate::domain::repository::CourseRepository;
use crate::domain::types::Course;
use crate::error::PortalError;

/// Every course across every company — the student home listing.
pub struct ListCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCoursesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Course>, PortalError> {
        self.repo.list_all().await
    }
}

/// One course by id, for the enrollment form. `None` is a valid
/// outcome — the form renders an empty state rather than erroring.
pub struct GetCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> GetCourseUseCase<R> {
    pub async fn execute(&self, course_id: i32) -> Result<Option<Course>, PortalError> {
        self.repo.find_by_id(course_id).await
    }
}

pub struct CreateCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> CreateCourseUseCase<R> {
    /// The company comes from the admin's session, never from the form.
    pub async fn execute(
        &self,
        name: &str,
        duration: &str,
        company_name: &str,
    ) -> Result<(), PortalError> {
        self.repo.create(name, duration, company_name).await
    }
}

pub struct ListCompanyCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCompanyCoursesUseCase<R> {
    pub async fn execute(&self, company_name: &str) -> Result<Vec<Course>, PortalError> {
        self.repo.list_by_company(company_name).await
    }
}

pub struct DeleteCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> DeleteCourseUseCase<R> {
    /// Scoped by the session's company: a foreign or unknown id deletes
    /// nothing and that is not an error.
    pub async fn execute(&self, course_id: i32, company_name: &str) -> Result<u64, PortalError> {
        self.repo.delete_scoped(course_id, company_name).await
    }
}
