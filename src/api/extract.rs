//! Session extractors for authenticated endpoints.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{SESSION_COOKIE, extract_cookie};

fn session_user_id(headers: &HeaderMap, state: &AppState) -> Option<i64> {
    let token = extract_cookie(headers, SESSION_COOKIE)?;
    state.session_service.verify(&token)
}

/// Extracts the authenticated user id from the session cookie.
///
/// Rejects with 401 when the cookie is missing or the token fails
/// verification. Use on endpoints that require a session.
pub struct SessionUser(pub i64);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_user_id(&parts.headers, state)
            .map(SessionUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required", json!({})))
    }
}

/// Extracts the session user id when present, without rejecting.
///
/// A missing cookie and an invalid token both yield `None`. Use on endpoints
/// where anonymous access is allowed.
pub struct MaybeSessionUser(pub Option<i64>);

impl FromRequestParts<AppState> for MaybeSessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSessionUser(session_user_id(&parts.headers, state)))
    }
}
