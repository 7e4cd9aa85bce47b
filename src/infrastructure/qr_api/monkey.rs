//! qrcode-monkey HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, error};

use super::service::QrApiService;
use crate::error::AppError;

/// Rendered image size in pixels requested from the renderer.
const RENDER_SIZE: u32 = 300;

/// HTTP client for the qrcode-monkey rendering API.
///
/// Generation requests an SVG and returns the raw bytes. Logo uploads proxy a
/// multipart form to the upload endpoint when one is configured.
pub struct MonkeyQrApi {
    client: Client,
    api_url: String,
    upload_url: Option<String>,
}

impl MonkeyQrApi {
    /// Creates a new client for the given rendering endpoint.
    ///
    /// `upload_url` enables logo uploads when set.
    pub fn new(api_url: String, upload_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url,
            upload_url,
        }
    }
}

#[async_trait]
impl QrApiService for MonkeyQrApi {
    async fn render(&self, data: &str, config: &Value) -> Result<Vec<u8>, AppError> {
        let body = json!({
            "data": data,
            "config": config,
            "size": RENDER_SIZE,
            "download": false,
            "file": "svg",
        });

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("QR render request failed: {}", e);
                AppError::upstream("Failed to generate QR code", json!({}))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            error!("QR render returned HTTP {}", status);
            return Err(AppError::upstream(
                "Failed to generate QR code",
                json!({ "status": status }),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read QR render response: {}", e);
            AppError::upstream("Failed to generate QR code", json!({}))
        })?;

        debug!("Rendered QR image ({} bytes)", bytes.len());

        Ok(bytes.to_vec())
    }

    async fn upload_logo(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Value, AppError> {
        let Some(upload_url) = self.upload_url.as_deref() else {
            return Err(AppError::not_found("Logo upload is not available", json!({})));
        };

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| {
                error!("Invalid logo content type: {}", e);
                AppError::bad_request("Invalid image content type", json!({}))
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Logo upload request failed: {}", e);
                AppError::upstream("Failed to upload image", json!({}))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            error!("Logo upload returned HTTP {}", status);
            return Err(AppError::upstream(
                "Failed to upload image",
                json!({ "status": status }),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            error!("Failed to parse logo upload response: {}", e);
            AppError::upstream("Failed to upload image", json!({}))
        })
    }
}
