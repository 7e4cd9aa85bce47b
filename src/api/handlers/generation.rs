//! Handler for QR generation.

use axum::{
    Json,
    extract::State,
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::dto::generation::GenerationRequest;
use crate::api::extract::MaybeSessionUser;
use crate::error::AppError;
use crate::state::AppState;

const TRACKING_ID_HEADER: HeaderName = HeaderName::from_static("x-tracking-id");
const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

/// Generates a QR image for a destination URL.
///
/// # Endpoint
///
/// `POST /qr/generation`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "config": { "body": "round", "bgColor": "FFFFFF" }
/// }
/// ```
///
/// # Response
///
/// Raw SVG bytes (`Content-Type: image/svg+xml`). The minted tracking
/// identifier is exposed in the `X-Tracking-Id` header; `X-User-Id` is added
/// when the request carries a valid session. The caller persists the result
/// via `POST /qr/history` using that identifier.
///
/// # Errors
///
/// Returns 400 for a malformed body or invalid URL and 500 when the external
/// renderer fails.
pub async fn generation_handler(
    State(state): State<AppState>,
    MaybeSessionUser(user_id): MaybeSessionUser,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let payload: GenerationRequest = serde_json::from_value(body).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;

    let config = if payload.config.is_null() {
        json!({})
    } else {
        payload.config
    };

    let generated = state
        .generation_service
        .generate(&payload.url, &config)
        .await?;

    let mut response = (
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (TRACKING_ID_HEADER, generated.tracking_id),
        ],
        generated.image,
    )
        .into_response();

    if let Some(id) = user_id {
        response
            .headers_mut()
            .insert(USER_ID_HEADER, HeaderValue::from(id));
    }

    Ok(response)
}
