//! PostgreSQL implementation of QR code repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewQrCode, QrCode};
use crate::domain::repositories::QrCodeRepository;
use crate::error::AppError;

/// PostgreSQL repository for QR code storage and scan tracking.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgQrCodeRepository {
    pool: Arc<PgPool>,
}

impl PgQrCodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QrCodeRepository for PgQrCodeRepository {
    async fn insert(&self, new_qr_code: NewQrCode) -> Result<QrCode, AppError> {
        let qr_code = sqlx::query_as::<_, QrCode>(
            r#"
            INSERT INTO qr_codes (tracking_id, url, qr_code, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tracking_id, url, qr_code, user_id, scans, created_at
            "#,
        )
        .bind(new_qr_code.tracking_id)
        .bind(new_qr_code.url)
        .bind(new_qr_code.qr_code)
        .bind(new_qr_code.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(qr_code)
    }

    async fn list_for_owner(&self, user_id: i64) -> Result<Vec<QrCode>, AppError> {
        let qr_codes = sqlx::query_as::<_, QrCode>(
            r#"
            SELECT id, tracking_id, url, qr_code, user_id, scans, created_at
            FROM qr_codes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(qr_codes)
    }

    async fn delete_for_owner(&self, tracking_id: &str, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM qr_codes
            WHERE tracking_id = $1 AND user_id = $2
            "#,
        )
        .bind(tracking_id)
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_and_increment_scans(&self, tracking_id: &str) -> Result<Option<String>, AppError> {
        // Single statement keeps lookup and counter bump atomic under
        // concurrent scans of the same code.
        let url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE qr_codes
            SET scans = scans + 1
            WHERE tracking_id = $1
            RETURNING url
            "#,
        )
        .bind(tracking_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
