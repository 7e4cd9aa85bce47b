//! External identity provider integration.
//!
//! Implements the provider side of the authorization-code login flow. CSRF
//! state handling and session issuance stay in the handler layer.

pub mod google;
pub mod service;

pub use google::GoogleIdentity;
pub use service::{ExternalProfile, IdentityService, generate_state};

#[cfg(test)]
pub use service::MockIdentityService;
