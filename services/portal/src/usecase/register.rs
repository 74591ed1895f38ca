use crate::domain::repository::{AdminRepository, StudentRepository};
use crate::domain::types::MIN_STUDENT_PASSWORD_LEN;
use crate::error::PortalError;
use crate::password::hash_password;

pub struct RegisterStudentUseCase<R: StudentRepository> {
    pub repo: R,
}

impl<R: StudentRepository> RegisterStudentUseCase<R> {
    /// The length rule runs before anything touches the store, so a
    /// rejected password never leaves a partial row behind.
    pub async fn execute(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), PortalError> {
        if password.chars().count() < MIN_STUDENT_PASSWORD_LEN {
            return Err(PortalError::StudentPasswordTooShort);
        }
        let hash = hash_password(password)?;
        self.repo.create(name, email, &hash).await
    }
}

pub struct RegisterAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> RegisterAdminUseCase<R> {
    pub async fn execute(
        &self,
        company_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), PortalError> {
        let hash = hash_password(password)?;
        self.repo.create(company_name, email, &hash).await
    }
}
