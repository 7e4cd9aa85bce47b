//! QR code persistence and scan tracking service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{NewQrCode, QrCode};
use crate::domain::repositories::QrCodeRepository;
use crate::error::AppError;
use crate::utils::data_uri::strip_data_uri_prefix;
use crate::utils::destination_url::validate_destination_url;

/// Service for saving generated QR codes and resolving scans.
///
/// Records are immutable after creation except for the scan counter, which is
/// only ever bumped by [`TrackingService::resolve_scan`].
pub struct TrackingService {
    qr_codes: Arc<dyn QrCodeRepository>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(qr_codes: Arc<dyn QrCodeRepository>) -> Self {
        Self { qr_codes }
    }

    /// Persists a generated QR code.
    ///
    /// The destination URL is stored exactly as submitted. Any data-URI prefix
    /// on the image payload is stripped before persisting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid destination URL,
    /// [`AppError::Conflict`] when the tracking identifier already exists, and
    /// [`AppError::Internal`] on database failure.
    pub async fn save(
        &self,
        tracking_id: String,
        url: String,
        qr_code: &str,
        user_id: Option<i64>,
    ) -> Result<QrCode, AppError> {
        validate_destination_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let saved = self
            .qr_codes
            .insert(NewQrCode {
                tracking_id,
                url,
                qr_code: strip_data_uri_prefix(qr_code),
                user_id,
            })
            .await?;

        info!(tracking_id = %saved.tracking_id, "qr code saved");

        Ok(saved)
    }

    /// Lists the owner's saved QR codes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database failure.
    pub async fn list(&self, user_id: i64) -> Result<Vec<QrCode>, AppError> {
        self.qr_codes.list_for_owner(user_id).await
    }

    /// Deletes a QR code owned by the requesting user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the record does not exist or
    /// belongs to another owner. The two cases are indistinguishable to the
    /// caller.
    pub async fn delete(&self, tracking_id: &str, user_id: i64) -> Result<(), AppError> {
        let deleted = self.qr_codes.delete_for_owner(tracking_id, user_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "QR code not found",
                json!({ "qrId": tracking_id }),
            ));
        }

        info!(tracking_id, "qr code deleted");

        Ok(())
    }

    /// Resolves a scan: looks up the tracking identifier and bumps its scan
    /// counter in one atomic step, returning the destination URL.
    ///
    /// Returns `None` for unknown identifiers, leaving the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database failure.
    pub async fn resolve_scan(&self, tracking_id: &str) -> Result<Option<String>, AppError> {
        self.qr_codes.find_and_increment_scans(tracking_id).await
    }

    /// Checks that the storage backend answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.qr_codes.ping().await
    }
}
