use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use upskill_session::cookie::set_flash_cookie;

/// Portal error variants. Every handled failure follows the portal's
/// POST-redirect-GET convention: the browser is sent back to the
/// originating form with a one-time flash notice (the `#[error]`
/// message doubles as the user-visible text). Only `Internal` renders
/// as a server error.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Password must be at least 8 characters long")]
    StudentPasswordTooShort,
    #[error("Email already registered.")]
    StudentEmailTaken,
    #[error("Email already registered.")]
    AdminEmailTaken,
    #[error("Invalid email or password.")]
    StudentInvalidCredentials,
    #[error("Invalid email or password.")]
    AdminInvalidCredentials,
    #[error("Student access required. Please login.")]
    StudentLoginRequired,
    #[error("Admin access required. Please login.")]
    AdminLoginRequired,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StudentPasswordTooShort => "STUDENT_PASSWORD_TOO_SHORT",
            Self::StudentEmailTaken => "STUDENT_EMAIL_TAKEN",
            Self::AdminEmailTaken => "ADMIN_EMAIL_TAKEN",
            Self::StudentInvalidCredentials => "STUDENT_INVALID_CREDENTIALS",
            Self::AdminInvalidCredentials => "ADMIN_INVALID_CREDENTIALS",
            Self::StudentLoginRequired => "STUDENT_LOGIN_REQUIRED",
            Self::AdminLoginRequired => "ADMIN_LOGIN_REQUIRED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Route the browser lands on after a handled failure; `None` for
    /// failures that are genuine server errors.
    fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::StudentPasswordTooShort | Self::StudentEmailTaken => Some("/student/register"),
            Self::AdminEmailTaken => Some("/admin/register"),
            Self::StudentInvalidCredentials | Self::StudentLoginRequired => {
                Some("/student/login")
            }
            Self::AdminInvalidCredentials | Self::AdminLoginRequired => Some("/admin/login"),
            Self::Internal(_) => None,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        match self.redirect_target() {
            Some(target) => {
                let jar = set_flash_cookie(CookieJar::new(), &self.to_string());
                (jar, Redirect::to(target)).into_response()
            }
            None => {
                // Log 500s only — tower-http TraceLayer already records
                // method/uri/status for every request.
                if let Self::Internal(ref e) = self {
                    tracing::error!(error = %e, kind = "INTERNAL", "internal error");
                }
                let body = serde_json::json!({
                    "kind": self.kind(),
                    "message": self.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
