//! Session and OAuth state cookie handling.
//!
//! Cookies are built and parsed by hand. Session tokens ride in an HTTP-only
//! `auth_token` cookie; the OAuth flow uses a short-lived `oauth_state` cookie
//! as its CSRF guard.

use axum::http::{HeaderMap, header::COOKIE};

/// Name of the session token cookie.
pub const SESSION_COOKIE: &str = "auth_token";

/// Name of the OAuth CSRF state cookie.
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Lifetime of the OAuth state cookie in seconds.
const OAUTH_STATE_MAX_AGE_SECS: i64 = 600;

fn build_cookie(name: &str, value: &str, max_age_secs: i64, same_site: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite={}; Max-Age={}",
        name, value, same_site, max_age_secs
    );

    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Builds the session cookie set by password logins.
///
/// Uses `SameSite=Strict`: the session is only ever used by same-origin
/// requests from the frontend.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    build_cookie(SESSION_COOKIE, token, max_age_secs, "Strict", secure)
}

/// Builds the session cookie set by the OAuth callback.
///
/// Uses `SameSite=Lax` so the cookie set during the cross-site redirect from
/// the identity provider is accepted by the browser.
pub fn oauth_session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    build_cookie(SESSION_COOKIE, token, max_age_secs, "Lax", secure)
}

/// Builds the cookie that removes the session on logout.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

/// Builds the short-lived OAuth CSRF state cookie.
pub fn oauth_state_cookie(value: &str, secure: bool) -> String {
    build_cookie(
        OAUTH_STATE_COOKIE,
        value,
        OAUTH_STATE_MAX_AGE_SECS,
        "Lax",
        secure,
    )
}

/// Builds the cookie that removes the OAuth state after the callback.
pub fn clear_oauth_state_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", OAUTH_STATE_COOKIE)
}

/// Extracts a cookie value from the request `Cookie` header.
///
/// Handles multiple cookies in the header by splitting on semicolons and
/// matching the requested name. Values containing `=` are preserved intact.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if key == name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}
