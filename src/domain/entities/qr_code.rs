//! QR code entity representing a tracked generation record.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A generated QR code with its tracking state.
///
/// `tracking_id` is the public identifier embedded in the QR image's tracking
/// URL; scanning resolves it back to `url`. `qr_code` holds the rendered
/// image payload with any data URI prefix stripped. `user_id` is `None` for
/// records saved without a session.
#[derive(Debug, Clone, FromRow)]
pub struct QrCode {
    pub id: i64,
    pub tracking_id: String,
    pub url: String,
    pub qr_code: String,
    pub user_id: Option<i64>,
    /// Number of times the tracking URL has been resolved. Only ever mutated
    /// by the redirect endpoint's atomic increment.
    pub scans: i64,
    pub created_at: DateTime<Utc>,
}

impl QrCode {
    /// Creates a new QrCode instance.
    pub fn new(
        id: i64,
        tracking_id: String,
        url: String,
        qr_code: String,
        user_id: Option<i64>,
        scans: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tracking_id,
            url,
            qr_code,
            user_id,
            scans,
            created_at,
        }
    }
}

/// Input data for persisting a new QR code record.
#[derive(Debug, Clone)]
pub struct NewQrCode {
    pub tracking_id: String,
    pub url: String,
    pub qr_code: String,
    pub user_id: Option<i64>,
}
