//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account CRUD operations
//! - [`QrCodeRepository`] - QR code records and scan counting

pub mod qr_code_repository;
pub mod user_repository;

pub use qr_code_repository::QrCodeRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use qr_code_repository::MockQrCodeRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
