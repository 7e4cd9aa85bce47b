//! Handler for scan redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::state::AppState;

/// Builds a `302 Found` redirect.
///
/// The scanning clients this endpoint serves follow 302 universally, so the
/// status is pinned rather than using a 303/307 variant.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Resolves a scanned tracking identifier to its destination URL.
///
/// # Endpoint
///
/// `GET /redirect/{tracking_id}`
///
/// # Request Flow
///
/// 1. Atomically look up the identifier and bump its scan counter
/// 2. Found: 302 to the stored destination URL
/// 3. Unknown identifier: 302 to the not-found page
/// 4. Storage failure: 302 to the generic error page
///
/// No authentication; a printed QR code is a public link. The caller is a
/// scanner or browser with no error UI, so this path never answers with a
/// JSON error body.
pub async fn redirect_handler(
    Path(tracking_id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.tracking_service.resolve_scan(&tracking_id).await {
        Ok(Some(url)) => {
            debug!(tracking_id = %tracking_id, "scan resolved");
            found(&url)
        }
        Ok(None) => {
            debug!(tracking_id = %tracking_id, "scan for unknown id");
            found(&format!("{}/404", state.public_base_url))
        }
        Err(e) => {
            error!("Failed to resolve scan: {}", e);
            found(&format!("{}/error", state.public_base_url))
        }
    }
}
