//! DTOs for the QR generation endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Request body for `POST /qr/generation`.
///
/// `config` is the renderer's style configuration (body shape, eye shape,
/// colors, gradients, logo reference). It is forwarded to the external
/// renderer unchanged, so new renderer options need no change here.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    pub url: String,

    #[serde(default)]
    pub config: Value,
}
