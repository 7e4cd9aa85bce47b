//! Handlers for session authentication endpoints.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::auth::{AuthRequest, MeResponse, SuccessResponse, UserResponse, UserView};
use crate::api::extract::MaybeSessionUser;
use crate::application::services::SESSION_TTL_SECS;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{clear_session_cookie, session_cookie};

/// Registers or logs in a user, switched by the `action` field.
///
/// # Endpoint
///
/// `POST /auth`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "secret",
///   "name": "User",          // optional, registration only
///   "action": "register"     // or "login"
/// }
/// ```
///
/// On success the session cookie is set and the response carries the public
/// view of the account.
///
/// # Errors
///
/// Returns 400 for a malformed body, an invalid email, a duplicate email on
/// registration, or an unknown action. Returns 401 for bad login credentials.
pub async fn auth_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload: AuthRequest = serde_json::from_value(body).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;
    payload.validate()?;

    let user = match payload.action.as_str() {
        "register" => {
            state
                .account_service
                .register(&payload.email, &payload.password, payload.name)
                .await?
        }
        "login" => {
            state
                .account_service
                .login(&payload.email, &payload.password)
                .await?
        }
        _ => {
            return Err(AppError::bad_request(
                "Invalid action",
                json!({ "action": payload.action }),
            ));
        }
    };

    let token = state.session_service.issue(user.id)?;
    let cookie = session_cookie(&token, SESSION_TTL_SECS, state.cookie_secure);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse {
            user: UserView::from(&user),
        }),
    ))
}

/// Logs out by expiring the session cookie.
///
/// # Endpoint
///
/// `DELETE /auth`
///
/// There is no server-side session state to revoke; the response simply
/// instructs the browser to drop the cookie.
pub async fn logout_handler() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(SuccessResponse { success: true }),
    )
}

/// Returns the current session's account, or `{"user": null}`.
///
/// # Endpoint
///
/// `GET /auth/me`
///
/// A missing, invalid, or expired session is not an error here; neither is a
/// session whose user row has since been deleted. All of them answer with a
/// null user so the frontend can render the logged-out state.
pub async fn me_handler(
    State(state): State<AppState>,
    MaybeSessionUser(user_id): MaybeSessionUser,
) -> Result<Json<MeResponse>, AppError> {
    let user = match user_id {
        Some(id) => state.account_service.get_user(id).await?,
        None => None,
    };

    Ok(Json(MeResponse {
        user: user.as_ref().map(UserView::from),
    }))
}
