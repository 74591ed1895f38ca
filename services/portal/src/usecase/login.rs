use anyhow::Context;

use upskill_session::token::{SessionRole, issue_session_token};

use crate::domain::repository::{AdminRepository, StudentRepository};
use crate::error::PortalError;
use crate::password::verify_password;

pub struct StudentLoginUseCase<R: StudentRepository> {
    pub repo: R,
    pub session_secret: String,
}

impl<R: StudentRepository> StudentLoginUseCase<R> {
    /// Unknown email and wrong password fail identically — the response
    /// never reveals whether the account exists.
    pub async fn execute(&self, email: &str, password: &str) -> Result<String, PortalError> {
        let student = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(PortalError::StudentInvalidCredentials)?;
        if !verify_password(password, &student.password_hash) {
            return Err(PortalError::StudentInvalidCredentials);
        }
        let token =
            issue_session_token(student.id, SessionRole::Student, None, &self.session_secret)
                .context("issue student session token")?;
        Ok(token)
    }
}

pub struct AdminLoginUseCase<R: AdminRepository> {
    pub repo: R,
    pub session_secret: String,
}

impl<R: AdminRepository> AdminLoginUseCase<R> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<String, PortalError> {
        let admin = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(PortalError::AdminInvalidCredentials)?;
        if !verify_password(password, &admin.password_hash) {
            return Err(PortalError::AdminInvalidCredentials);
        }
        let token = issue_session_token(
            admin.id,
            SessionRole::Admin,
            Some(&admin.company_name),
            &self.session_secret,
        )
        .context("issue admin session token")?;
        Ok(token)
    }
}
