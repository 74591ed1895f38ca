//! Session-token issue and validation.
//!
//! The portal keeps no server-side session table: the signed token is
//! the whole session. Claims carry the authenticated row id, the role,
//! and — for admins — the company name captured from the admins row at
//! login (never re-derived afterwards).

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session token lifetime in seconds (8 hours).
pub const SESSION_TOKEN_EXP: u64 = 28_800;

/// Which login flow produced the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    Student,
    Admin,
}

impl SessionRole {
    pub fn wire(self) -> u8 {
        match self {
            Self::Student => 0,
            Self::Admin => 1,
        }
    }

    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Student),
            1 => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Claims payload of the session token.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sub` | row id of the student or admin, as a decimal string |
/// | `role` | [`SessionRole`] wire value |
/// | `company` | admin sessions only: the company name string |
/// | `exp` | seconds since UNIX epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub exp: u64,
}

/// Decoded identity of an authenticated request.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: i32,
    pub role: SessionRole,
    pub company_name: Option<String>,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed session token")]
    Malformed,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a fresh session token for a logged-in user.
pub fn issue_session_token(
    user_id: i32,
    role: SessionRole,
    company_name: Option<&str>,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        role: role.wire(),
        company: company_name.map(str::to_owned),
        exp: now_secs() + SESSION_TOKEN_EXP,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate a session-cookie value and return the decoded identity.
///
/// Validation: HS256, exp checked (default 60s leeway for clock skew),
/// required claims `exp` + `sub`.
pub fn validate_session_token(
    cookie_value: &str,
    secret: &str,
) -> Result<SessionInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        cookie_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let claims = data.claims;
    let user_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| SessionError::Malformed)?;
    let role = SessionRole::from_wire(claims.role).ok_or(SessionError::Malformed)?;

    Ok(SessionInfo {
        user_id,
        role,
        company_name: claims.company,
    })
}
