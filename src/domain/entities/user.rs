//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account.
///
/// Accounts come from two paths: password registration (carries a
/// `password_hash`, no `google_id`) and Google sign-in (carries a
/// `google_id`, no `password_hash`). An account that used both ends up with
/// both set. The `email` column is stored lowercased and is unique
/// case-insensitively.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: Option<String>,
    pub name: String,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        email: String,
        password_hash: Option<String>,
        name: String,
        google_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
            google_id,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: Option<String>,
    pub name: String,
    pub google_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_user_creation() {
        let user = User::new(
            1,
            "user@example.com".to_string(),
            Some("$argon2id$...".to_string()),
            "User".to_string(),
            None,
            Utc::now(),
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "user@example.com");
        assert!(user.password_hash.is_some());
        assert!(user.google_id.is_none());
    }

    #[test]
    fn test_google_user_creation() {
        let user = User::new(
            2,
            "google@example.com".to_string(),
            None,
            "Google User".to_string(),
            Some("108234".to_string()),
            Utc::now(),
        );

        assert!(user.password_hash.is_none());
        assert_eq!(user.google_id.as_deref(), Some("108234"));
    }
}
