#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Admin, Course, EnrollmentRecord, NewEnrollment, StatGroup, StatsFilter, Student,
};
use crate::error::PortalError;

/// Repository for student accounts.
pub trait StudentRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, PortalError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, PortalError>;
    /// Insert one student row. A duplicate email surfaces as
    /// `StudentEmailTaken` with nothing written.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), PortalError>;
}

/// Repository for admin (company) accounts.
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, PortalError>;
    /// Insert one admin row. A duplicate email surfaces as
    /// `AdminEmailTaken` with nothing written.
    async fn create(
        &self,
        company_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), PortalError>;
}

/// Repository for courses.
pub trait CourseRepository: Send + Sync {
    /// Every course row, store order — the student home listing.
    async fn list_all(&self) -> Result<Vec<Course>, PortalError>;
    async fn list_by_company(&self, company_name: &str) -> Result<Vec<Course>, PortalError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, PortalError>;
    async fn create(
        &self,
        name: &str,
        duration: &str,
        company_name: &str,
    ) -> Result<(), PortalError>;
    /// Delete only when both id and company match. Returns the number
    /// of rows affected; 0 (wrong id or wrong tenant) is not an error.
    async fn delete_scoped(&self, id: i32, company_name: &str) -> Result<u64, PortalError>;
    /// Distinct course names for one company — the stats dropdown.
    async fn distinct_names(&self, company_name: &str) -> Result<Vec<String>, PortalError>;
}

/// Repository for enrollments.
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, enrollment: &NewEnrollment) -> Result<(), PortalError>;
    /// All enrollments for a student, joined to their courses.
    async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<EnrollmentRecord>, PortalError>;
    /// Enrollment counts grouped by (course name, year) for one
    /// company, restricted to whichever filters are present.
    async fn stats(
        &self,
        company_name: &str,
        filter: &StatsFilter,
    ) -> Result<Vec<StatGroup>, PortalError>;
    /// Distinct years among one company's enrollments — the stats dropdown.
    async fn distinct_years(&self, company_name: &str) -> Result<Vec<String>, PortalError>;
}
