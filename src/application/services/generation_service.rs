//! QR generation service.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::info;

use crate::error::AppError;
use crate::infrastructure::qr_api::QrApiService;
use crate::utils::destination_url::validate_destination_url;
use crate::utils::tracking_id::generate_tracking_id;

/// A freshly generated QR image with the tracking identifier it encodes.
#[derive(Debug)]
pub struct GeneratedQr {
    pub tracking_id: String,
    /// Raw SVG bytes from the renderer.
    pub image: Vec<u8>,
}

/// Service that turns a destination URL and style configuration into a
/// tracked QR image.
///
/// The rendered QR never encodes the destination URL directly. It encodes a
/// tracking URL under this service's public base, so every scan passes
/// through the redirect endpoint and bumps the scan counter.
pub struct GenerationService {
    qr_api: Arc<dyn QrApiService>,
    public_base_url: String,
}

impl GenerationService {
    /// Creates a new generation service.
    ///
    /// `public_base_url` must be externally reachable; it becomes the prefix
    /// of every tracking URL baked into a physical QR code.
    pub fn new(qr_api: Arc<dyn QrApiService>, public_base_url: String) -> Self {
        Self {
            qr_api,
            public_base_url,
        }
    }

    /// Builds the tracking URL a QR code encodes for the given identifier.
    pub fn tracking_url(&self, tracking_id: &str) -> String {
        format!("{}/redirect/{}", self.public_base_url, tracking_id)
    }

    /// Generates a QR image for a destination URL.
    ///
    /// Mints a fresh tracking identifier, composes the tracking URL, and asks
    /// the external renderer for an SVG of it. Generation is a single
    /// best-effort attempt; the caller persists the result separately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid destination URL and
    /// [`AppError::Upstream`] when the renderer fails.
    pub async fn generate(&self, url: &str, config: &Value) -> Result<GeneratedQr, AppError> {
        validate_destination_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let tracking_id = generate_tracking_id();
        let tracking_url = self.tracking_url(&tracking_id);

        let image = self.qr_api.render(&tracking_url, config).await?;

        info!(tracking_id = %tracking_id, "qr image generated");

        Ok(GeneratedQr { tracking_id, image })
    }

    /// Forwards a logo upload to the renderer.
    ///
    /// # Errors
    ///
    /// See [`QrApiService::upload_logo`].
    pub async fn upload_logo(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Value, AppError> {
        self.qr_api.upload_logo(file_name, content_type, bytes).await
    }
}
