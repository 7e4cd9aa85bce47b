//! External identity provider trait.

use async_trait::async_trait;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::AppError;

/// Profile returned by the identity provider after a successful code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalProfile {
    /// Provider-assigned stable identifier.
    pub id: String,
    pub email: String,
    /// Display name; absent for some accounts.
    pub name: Option<String>,
}

/// Trait for an external OAuth identity provider.
///
/// The flow is the standard authorization-code dance: the login endpoint
/// redirects to [`IdentityService::authorize_url`], the provider calls back
/// with a code, and [`IdentityService::fetch_profile`] exchanges it for the
/// account profile.
///
/// # Implementations
///
/// - [`crate::infrastructure::oauth::GoogleIdentity`] - Google sign-in
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Builds the provider consent-screen URL carrying the CSRF `state`.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchanges an authorization code for the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the token exchange or the profile
    /// fetch fails. Callers surface this as a generic login failure.
    async fn fetch_profile(&self, code: &str) -> Result<ExternalProfile, AppError>;
}

/// Generates a random CSRF state for the login redirect.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_state() -> String {
    let mut buffer = [0u8; 16];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
