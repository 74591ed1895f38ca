use axum::Json;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use upskill_session::cookie::{clear_session_cookie, take_flash};

/// `GET /` — the landing page with the two portal entry points.
pub async fn landing(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = take_flash(jar);
    (
        jar,
        Json(json!({
            "view": "landing",
            "notice": notice,
        })),
    )
}

/// `GET /logout` — drops the session cookie; works for both roles and
/// for visitors with no session at all.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (clear_session_cookie(jar), Redirect::to("/"))
}
