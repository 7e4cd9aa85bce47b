//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound HTTP calls.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`qr_api`] - External QR rendering client
//! - [`oauth`] - External identity provider client

pub mod oauth;
pub mod persistence;
pub mod qr_api;
