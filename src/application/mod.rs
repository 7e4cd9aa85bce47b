//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration and login
//! - [`services::session_service::SessionService`] - Session token issue/verify
//! - [`services::tracking_service::TrackingService`] - QR persistence and scan tracking
//! - [`services::generation_service::GenerationService`] - QR image generation

pub mod services;
