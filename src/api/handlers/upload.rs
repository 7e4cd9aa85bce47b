//! Handler for the logo upload proxy.

use axum::{Json, extract::Multipart, extract::State};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Forwards a logo image to the external renderer.
///
/// # Endpoint
///
/// `POST /qr/upload`
///
/// Accepts a multipart form with a `file` part and proxies it to the
/// renderer's upload endpoint. The provider's JSON response passes through
/// unchanged; its `file` field is the logo reference a later generation
/// request embeds in its style config.
///
/// # Errors
///
/// Returns 400 when the form has no `file` part, 404 when no upload endpoint
/// is configured, and 500 when the provider call fails.
pub async fn upload_logo_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Invalid multipart payload", json!({ "reason": e.to_string() }))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("logo.png").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                AppError::bad_request(
                    "Invalid multipart payload",
                    json!({ "reason": e.to_string() }),
                )
            })?
            .to_vec();

        let uploaded = state
            .generation_service
            .upload_logo(file_name, content_type, bytes)
            .await?;

        return Ok(Json(uploaded));
    }

    Err(AppError::bad_request(
        "Missing file field",
        json!({ "field": "file" }),
    ))
}
