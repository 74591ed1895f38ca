//! Cookie builders for the session token and the flash notice.
//!
//! The session cookie has no Max-Age: it lives for the browser session
//! only, matching the portal's no-persistent-session policy. The flash
//! cookie is a one-time notice consumed by the next rendered view.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use time::Duration;

/// Cookie name for the session token.
pub const UPSKILL_SESSION: &str = "upskill_session";

/// Cookie name for the one-time flash notice.
pub const UPSKILL_FLASH: &str = "upskill_flash";

/// Flash cookie Max-Age in seconds. Long enough to survive the
/// redirect hop, short enough not to linger on abandoned navigation.
pub const FLASH_MAX_AGE_SECS: i64 = 60;

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use upskill_session::cookie::{set_session_cookie, UPSKILL_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "token_value".to_string());
/// let cookie = jar.get(UPSKILL_SESSION).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.max_age().is_none());
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String) -> CookieJar {
    let cookie = Cookie::build((UPSKILL_SESSION, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0. Harmless when no
/// session cookie is present.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use upskill_session::cookie::{clear_session_cookie, set_session_cookie, UPSKILL_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".to_string());
/// let jar = clear_session_cookie(jar);
/// let cookie = jar.get(UPSKILL_SESSION).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((UPSKILL_SESSION, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Set a one-time flash notice. The message is base64-encoded so free
/// text (spaces, punctuation) stays within the cookie-value grammar.
pub fn set_flash_cookie(jar: CookieJar, message: &str) -> CookieJar {
    let cookie = Cookie::build((UPSKILL_FLASH, URL_SAFE_NO_PAD.encode(message)))
        .path("/")
        .max_age(Duration::seconds(FLASH_MAX_AGE_SECS))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Consume the flash notice: returns the jar with the cookie cleared
/// plus the decoded message, if one was set. An undecodable value is
/// dropped silently.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use upskill_session::cookie::{set_flash_cookie, take_flash};
///
/// let jar = set_flash_cookie(CookieJar::new(), "Enrolled successfully.");
/// let (_jar, notice) = take_flash(jar);
/// assert_eq!(notice.as_deref(), Some("Enrolled successfully."));
/// ```
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(UPSKILL_FLASH).and_then(|cookie| {
        let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
        String::from_utf8(bytes).ok()
    });

    let removal = Cookie::build((UPSKILL_FLASH, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(removal), message)
}
