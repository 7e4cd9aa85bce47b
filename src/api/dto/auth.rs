//! DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /auth`.
///
/// One endpoint covers both registration and login, switched by `action`.
#[derive(Debug, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    /// Display name used on registration; falls back to the email local part.
    pub name: Option<String>,

    /// `"register"` or `"login"`. Anything else is a validation error.
    pub action: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Response envelope for login and registration.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserView,
}

/// Response for `GET /auth/me`. `user` is null without a valid session.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<UserView>,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_valid() {
        let json = r#"{"email": "a@example.com", "password": "secret123", "action": "login"}"#;
        let req: AuthRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
    }

    #[test]
    fn test_auth_request_rejects_bad_email() {
        let json = r#"{"email": "not-an-email", "password": "secret123", "action": "login"}"#;
        let req: AuthRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_auth_request_rejects_empty_password() {
        let json = r#"{"email": "a@example.com", "password": "", "action": "login"}"#;
        let req: AuthRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_auth_request_missing_field_is_serde_error() {
        let json = r#"{"email": "a@example.com", "action": "login"}"#;

        assert!(serde_json::from_str::<AuthRequest>(json).is_err());
    }

    #[test]
    fn test_user_view_omits_sensitive_fields() {
        use chrono::Utc;

        let user = User::new(
            1,
            "a@example.com".to_string(),
            Some("$argon2id$...".to_string()),
            "Alice".to_string(),
            Some("google-1".to_string()),
            Utc::now(),
        );

        let view = UserView::from(&user);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@example.com");
        assert_eq!(json["name"], "Alice");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("google_id").is_none());
    }
}
