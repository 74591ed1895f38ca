//! Client-held session state for the portal: a signed session token
//! (issued at login, validated by the route guards) and the cookie
//! builders that carry it plus the one-time flash notice.

pub mod cookie;
pub mod token;
