//! API route configuration.
//!
//! Routes are split into two groups so the router can apply different
//! rate limits: the public QR endpoints and the stricter-limited
//! authentication endpoints.

use crate::api::handlers::{
    auth_handler, delete_qr_handler, generation_handler, google_callback_handler,
    google_login_handler, list_history_handler, logout_handler, me_handler, save_qr_handler,
    upload_logo_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public QR endpoints.
///
/// # Endpoints
///
/// - `POST   /qr/generation` - Render a QR code as SVG
/// - `POST   /qr/history`    - Save a generated QR code
/// - `GET    /qr/history`    - List the session user's saved QR codes
/// - `DELETE /qr/history`    - Delete a saved QR code by id
/// - `POST   /qr/upload`     - Proxy a logo image upload to the render provider
///
/// Generation and saving work without a session; history listing and
/// deletion are scoped to the session user.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/qr/generation", post(generation_handler))
        .route(
            "/qr/history",
            post(save_qr_handler)
                .get(list_history_handler)
                .delete(delete_qr_handler),
        )
        .route("/qr/upload", post(upload_logo_handler))
}

/// Authentication endpoints.
///
/// # Endpoints
///
/// - `POST   /auth`                 - Register or log in (by `action` field)
/// - `DELETE /auth`                 - Log out (clear the session cookie)
/// - `GET    /auth/me`              - Current session user, if any
/// - `GET    /auth/google`          - Start the Google OAuth flow
/// - `GET    /auth/google/callback` - Complete the Google OAuth flow
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth_handler).delete(logout_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/google", get(google_login_handler))
        .route("/auth/google/callback", get(google_callback_handler))
}
