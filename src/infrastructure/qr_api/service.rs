//! QR rendering service trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

/// Trait for the external QR rendering service.
///
/// Implementations must be thread-safe. A failed call surfaces immediately as
/// an upstream error; no retry is attempted.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr_api::MonkeyQrApi`] - qrcode-monkey HTTP client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrApiService: Send + Sync {
    /// Renders a QR image for the given payload and style configuration.
    ///
    /// # Arguments
    ///
    /// - `data` - The URL encoded into the QR image
    /// - `config` - Style configuration forwarded to the renderer unchanged
    ///
    /// # Returns
    ///
    /// Raw SVG bytes as produced by the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on a non-success response or a network
    /// failure.
    async fn render(&self, data: &str, config: &Value) -> Result<Vec<u8>, AppError>;

    /// Uploads a logo image to the renderer and returns its JSON response.
    ///
    /// The returned value carries the renderer-assigned file reference that
    /// clients embed into a subsequent render configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no upload endpoint is configured and
    /// [`AppError::Upstream`] on a non-success response or a network failure.
    async fn upload_logo(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Value, AppError>;
}
