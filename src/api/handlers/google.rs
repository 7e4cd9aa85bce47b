//! Handlers for the Google sign-in flow.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use super::redirect::found;
use crate::application::services::SESSION_TTL_SECS;
use crate::error::AppError;
use crate::infrastructure::oauth::generate_state;
use crate::state::AppState;
use crate::utils::cookies::{
    OAUTH_STATE_COOKIE, clear_oauth_state_cookie, extract_cookie, oauth_session_cookie,
    oauth_state_cookie,
};

/// Query parameters Google appends to the callback redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Starts the Google sign-in flow.
///
/// # Endpoint
///
/// `GET /auth/google`
///
/// Mints a CSRF state, stores it in a short-lived cookie, and 302-redirects
/// to the provider consent screen. Responds 404 when Google credentials are
/// not configured.
pub async fn google_login_handler(State(state): State<AppState>) -> Response {
    let Some(identity) = state.identity_service.as_ref() else {
        return AppError::not_found("Google sign-in is not configured", json!({})).into_response();
    };

    let csrf_state = generate_state();
    let authorize_url = identity.authorize_url(&csrf_state);
    let cookie = oauth_state_cookie(&csrf_state, state.cookie_secure);

    ([(header::SET_COOKIE, cookie)], found(&authorize_url)).into_response()
}

/// Completes the Google sign-in flow.
///
/// # Endpoint
///
/// `GET /auth/google/callback?code=...&state=...`
///
/// The `state` query parameter must match the value stored in the CSRF
/// cookie; a mismatch redirects to the frontend error page without touching
/// the provider. On a valid state the code is exchanged for a profile, the
/// account is upserted, and a session cookie is set before redirecting home.
///
/// This endpoint lands in a browser mid-redirect, so every failure is a 302
/// to the frontend error page rather than a JSON error.
pub async fn google_callback_handler(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
) -> Response {
    let Some(identity) = state.identity_service.as_ref() else {
        return AppError::not_found("Google sign-in is not configured", json!({})).into_response();
    };

    let stored_state = extract_cookie(&headers, OAUTH_STATE_COOKIE);
    let state_is_valid = matches!(
        (params.state.as_deref(), stored_state.as_deref()),
        (Some(query), Some(stored)) if query == stored
    );

    if !state_is_valid {
        warn!("Google callback with mismatched state");
        return error_redirect(&state.public_base_url, "invalid_state");
    }

    let Some(code) = params.code else {
        warn!("Google callback without a code");
        return error_redirect(&state.public_base_url, "auth_failed");
    };

    let session = async {
        let profile = identity.fetch_profile(&code).await?;
        let user = state.account_service.login_with_google(&profile).await?;
        state.session_service.issue(user.id)
    }
    .await;

    match session {
        Ok(token) => {
            let cookie = oauth_session_cookie(&token, SESSION_TTL_SECS, state.cookie_secure);

            (
                AppendHeaders([
                    (header::SET_COOKIE, cookie),
                    (header::SET_COOKIE, clear_oauth_state_cookie()),
                ]),
                found(&state.public_base_url),
            )
                .into_response()
        }
        Err(e) => {
            error!("Google sign-in failed: {}", e);
            error_redirect(&state.public_base_url, "auth_failed")
        }
    }
}

fn error_redirect(base_url: &str, message: &str) -> Response {
    found(&format!("{}/error?message={}", base_url, message))
}
