//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the QR tracking service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`QrCode`] - A generated QR code with its tracking state
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewQrCode` - For creating new records
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod qr_code;
pub mod user;

pub use qr_code::{NewQrCode, QrCode};
pub use user::{NewUser, User};
