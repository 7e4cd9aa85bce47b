//! Business logic services for the application layer.

pub mod account_service;
pub mod generation_service;
pub mod session_service;
pub mod tracking_service;

pub use account_service::AccountService;
pub use generation_service::{GeneratedQr, GenerationService};
pub use session_service::{SESSION_TTL_SECS, SessionService};
pub use tracking_service::TrackingService;
