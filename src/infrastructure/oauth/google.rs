//! Google OAuth identity provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::service::{ExternalProfile, IdentityService};
use crate::error::AppError;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Google implementation of the authorization-code flow.
pub struct GoogleIdentity {
    client: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GoogleIdentity {
    /// Creates a provider for the given credentials.
    ///
    /// `public_base_url` is the externally reachable base of this service; the
    /// callback registered with Google must be `{public_base_url}/auth/google/callback`.
    pub fn new(client_id: String, client_secret: String, public_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            client_id,
            client_secret,
            redirect_uri: format!("{}/auth/google/callback", public_base_url),
        }
    }
}

#[async_trait]
impl IdentityService for GoogleIdentity {
    fn authorize_url(&self, state: &str) -> String {
        let params = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "email profile")
            .append_pair("state", state)
            .append_pair("prompt", "select_account")
            .finish();

        format!("{}?{}", AUTH_URL, params)
    }

    async fn fetch_profile(&self, code: &str) -> Result<ExternalProfile, AppError> {
        let body = json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "code": code,
            "redirect_uri": self.redirect_uri,
            "grant_type": "authorization_code",
        });

        let response = self
            .client
            .post(TOKEN_URL)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Google token exchange failed: {}", e);
                AppError::upstream("Sign-in failed", json!({}))
            })?;

        if !response.status().is_success() {
            error!(
                "Google token exchange returned HTTP {}",
                response.status().as_u16()
            );
            return Err(AppError::upstream("Sign-in failed", json!({})));
        }

        let tokens = response.json::<TokenResponse>().await.map_err(|e| {
            error!("Failed to parse Google token response: {}", e);
            AppError::upstream("Sign-in failed", json!({}))
        })?;

        let response = self
            .client
            .get(USERINFO_URL)
            .bearer_auth(&tokens.access_token)
            .send()
            .await
            .map_err(|e| {
                error!("Google profile fetch failed: {}", e);
                AppError::upstream("Sign-in failed", json!({}))
            })?;

        if !response.status().is_success() {
            error!(
                "Google profile fetch returned HTTP {}",
                response.status().as_u16()
            );
            return Err(AppError::upstream("Sign-in failed", json!({})));
        }

        response.json::<ExternalProfile>().await.map_err(|e| {
            error!("Failed to parse Google profile: {}", e);
            AppError::upstream("Sign-in failed", json!({}))
        })
    }
}
