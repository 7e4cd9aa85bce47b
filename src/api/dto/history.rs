//! DTOs for the QR history endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::QrCode;

/// Request body for `POST /qr/history`.
///
/// Field names follow the wire contract the frontend speaks (camelCase).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQrRequest {
    pub url: String,
    pub qr_code: String,
    pub tracking_id: String,
}

/// Query parameters for `DELETE /qr/history`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQrParams {
    /// The tracking identifier of the record to delete.
    pub qr_id: String,
}

/// JSON view of a saved QR code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeView {
    pub id: i64,
    pub tracking_id: String,
    pub url: String,
    pub qr_code: String,
    pub scans: i64,
    pub created_at: DateTime<Utc>,
}

impl From<QrCode> for QrCodeView {
    fn from(qr: QrCode) -> Self {
        Self {
            id: qr.id,
            tracking_id: qr.tracking_id,
            url: qr.url,
            qr_code: qr.qr_code,
            scans: qr.scans,
            created_at: qr.created_at,
        }
    }
}
