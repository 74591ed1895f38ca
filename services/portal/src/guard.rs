//! Session guards. The "login required" check is cross-cutting, so it
//! lives here as two explicit functions called at the top of every
//! protected handler — no middleware magic, control flow stays visible.

use axum_extra::extract::cookie::CookieJar;

use upskill_session::cookie::UPSKILL_SESSION;
use upskill_session::token::{SessionRole, validate_session_token};

use crate::domain::types::{AdminSession, StudentSession};
use crate::error::PortalError;

/// Authorize a student request. Any defect — no cookie, bad signature,
/// expired token, wrong role — collapses to `StudentLoginRequired`.
pub fn require_student(jar: &CookieJar, secret: &str) -> Result<StudentSession, PortalError> {
    let token = jar
        .get(UPSKILL_SESSION)
        .map(|c| c.value().to_owned())
        .ok_or(PortalError::StudentLoginRequired)?;

    let info = validate_session_token(&token, secret)
        .map_err(|_| PortalError::StudentLoginRequired)?;

    if info.role != SessionRole::Student {
        return Err(PortalError::StudentLoginRequired);
    }
    Ok(StudentSession {
        student_id: info.user_id,
    })
}

/// Authorize an admin request. The company claim must be present — it
/// was captured at login and scopes every admin query.
pub fn require_admin(jar: &CookieJar, secret: &str) -> Result<AdminSession, PortalError> {
    let token = jar
        .get(UPSKILL_SESSION)
        .map(|c| c.value().to_owned())
        .ok_or(PortalError::AdminLoginRequired)?;

    let info =
        validate_session_token(&token, secret).map_err(|_| PortalError::AdminLoginRequired)?;

    if info.role != SessionRole::Admin {
        return Err(PortalError::AdminLoginRequired);
    }
    let company_name = info.company_name.ok_or(PortalError::AdminLoginRequired)?;
    Ok(AdminSession {
        admin_id: info.user_id,
        company_name,
    })
}
