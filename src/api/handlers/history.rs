//! Handlers for QR history endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use crate::api::dto::auth::SuccessResponse;
use crate::api::dto::history::{DeleteQrParams, QrCodeView, SaveQrRequest};
use crate::api::extract::{MaybeSessionUser, SessionUser};
use crate::error::AppError;
use crate::state::AppState;

/// Persists a generated QR code.
///
/// # Endpoint
///
/// `POST /qr/history`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "qrCode": "<svg .../>",
///   "trackingId": "abc123xyz456"
/// }
/// ```
///
/// The record is attached to the session user when one is present; anonymous
/// saves are stored without an owner and will not appear in any history list.
///
/// # Errors
///
/// Returns 400 for a malformed body or invalid URL and 409 when the tracking
/// identifier is already taken.
pub async fn save_qr_handler(
    State(state): State<AppState>,
    MaybeSessionUser(user_id): MaybeSessionUser,
    Json(body): Json<Value>,
) -> Result<Json<QrCodeView>, AppError> {
    let payload: SaveQrRequest = serde_json::from_value(body).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;

    let saved = state
        .tracking_service
        .save(payload.tracking_id, payload.url, &payload.qr_code, user_id)
        .await?;

    Ok(Json(QrCodeView::from(saved)))
}

/// Lists the caller's saved QR codes, newest first.
///
/// # Endpoint
///
/// `GET /qr/history`
///
/// Unauthenticated callers get an empty array, not an error; the frontend
/// renders the same view either way.
pub async fn list_history_handler(
    State(state): State<AppState>,
    MaybeSessionUser(user_id): MaybeSessionUser,
) -> Result<Json<Vec<QrCodeView>>, AppError> {
    let Some(user_id) = user_id else {
        return Ok(Json(Vec::new()));
    };

    let qr_codes = state.tracking_service.list(user_id).await?;

    Ok(Json(qr_codes.into_iter().map(QrCodeView::from).collect()))
}

/// Deletes one of the caller's saved QR codes.
///
/// # Endpoint
///
/// `DELETE /qr/history?qrId=<trackingId>`
///
/// # Errors
///
/// Returns 401 without a session. Returns 404 when the record does not exist
/// or belongs to someone else; the response does not distinguish the two.
pub async fn delete_qr_handler(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Query(params): Query<DeleteQrParams>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.tracking_service.delete(&params.qr_id, user_id).await?;

    Ok(Json(SuccessResponse { success: true }))
}
