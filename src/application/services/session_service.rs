//! Session token issuing and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;

/// Session lifetime in seconds (7 days). Cookies carry the same max-age.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    iat: usize,
    exp: usize,
}

/// Service for issuing and verifying signed session tokens.
///
/// Sessions are stateless: the token encodes the user id and expiry, signed
/// with the server secret. There is no server-side session store and no
/// revocation list; logout is client-side cookie deletion.
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionService {
    /// Creates a service signing with the given secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a session token for the user with a 7-day expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        self.sign(user_id, SESSION_TTL_SECS)
    }

    fn sign(&self, user_id: i64, ttl_secs: i64) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now as usize,
            exp: (now + ttl_secs) as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| AppError::internal("Failed to issue session", json!({})))?;

        debug!(user_id, "session issued");

        Ok(token)
    }

    /// Verifies a session token, returning the user id it was issued for.
    ///
    /// Malformed, tampered, and expired tokens all verify as `None`. Callers
    /// treat that as an unauthenticated state, never as an error.
    pub fn verify(&self, token: &str) -> Option<i64> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .ok()
            .map(|data| data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> SessionService {
        SessionService::new("test-session-secret")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = test_service();

        let token = service.issue(42).unwrap();

        assert_eq!(service.verify(&token), Some(42));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = test_service();

        assert_eq!(service.verify("not-a-token"), None);
        assert_eq!(service.verify(""), None);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let service = test_service();

        let token = service.issue(42).unwrap();
        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);

        assert_eq!(service.verify(&tampered), None);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let service = test_service();
        let other = SessionService::new("a-different-secret");

        let token = service.issue(42).unwrap();

        assert_eq!(other.verify(&token), None);
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = test_service();

        // Default validation allows 60s of clock leeway, so sign well past it.
        let token = service.sign(42, -120).unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_tokens_identify_distinct_users() {
        let service = test_service();

        let a = service.issue(1).unwrap();
        let b = service.issue(2).unwrap();

        assert_eq!(service.verify(&a), Some(1));
        assert_eq!(service.verify(&b), Some(2));
    }
}
