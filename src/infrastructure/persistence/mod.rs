//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage
//! - [`PgQrCodeRepository`] - QR code storage and scan tracking

pub mod pg_qr_code_repository;
pub mod pg_user_repository;

pub use pg_qr_code_repository::PgQrCodeRepository;
pub use pg_user_repository::PgUserRepository;
