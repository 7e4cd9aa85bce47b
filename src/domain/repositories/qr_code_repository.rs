//! Repository trait for QR code record data access.

use crate::domain::entities::{NewQrCode, QrCode};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing QR code records.
///
/// Covers persistence of generated codes, per-owner history queries, and the
/// atomic scan counting used by the redirect endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQrCodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrCodeRepository: Send + Sync {
    /// Persists a new QR code record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the tracking id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_qr_code: NewQrCode) -> Result<QrCode, AppError>;

    /// Lists an owner's records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_owner(&self, user_id: i64) -> Result<Vec<QrCode>, AppError>;

    /// Deletes a record only if it belongs to the given owner.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if no record
    /// matched both the tracking id and the owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_for_owner(&self, tracking_id: &str, user_id: i64) -> Result<bool, AppError>;

    /// Atomically increments the scan counter and returns the destination URL.
    ///
    /// The lookup and the increment happen in a single statement, so
    /// concurrent scans never lose updates.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if a record matched the tracking id
    /// - `Ok(None)` if no record matched (nothing is modified)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_and_increment_scans(&self, tracking_id: &str)
    -> Result<Option<String>, AppError>;

    /// Verifies storage connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
