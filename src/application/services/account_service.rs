//! User registration and login service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::oauth::ExternalProfile;
use crate::utils::password::{hash_password, verify_password};

/// Service for user account management and credential checks.
///
/// Emails are treated case-insensitively throughout. Password accounts carry
/// an argon2 hash; externally authenticated accounts may have no password at
/// all, in which case password login always fails without revealing why.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a new password account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the email is already registered
    /// and [`AppError::Internal`] on hashing or database failure.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
    ) -> Result<User, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::bad_request("Email already registered", json!({})));
        }

        let password_hash = hash_password(password)?;
        let name = name.unwrap_or_else(|| local_part(email).to_string());

        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash: Some(password_hash),
                name,
                google_id: None,
            })
            .await?;

        info!(user_id = user.id, "user registered");

        Ok(user)
    }

    /// Authenticates a password login.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown email, a wrong
    /// password, or an account with no password set. The message is identical
    /// in all three cases.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let invalid = || AppError::unauthorized("Invalid credentials", json!({}));

        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(invalid());
        };

        if !verify_password(password, hash) {
            return Err(invalid());
        }

        Ok(user)
    }

    /// Logs in (or registers) a user from an external identity profile.
    ///
    /// An existing account with the same email is reused; its external id is
    /// recorded on first external login. A new account is created otherwise,
    /// with the display name falling back to the email local part.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database failure.
    pub async fn login_with_google(&self, profile: &ExternalProfile) -> Result<User, AppError> {
        if let Some(user) = self.users.find_by_email(&profile.email).await? {
            if user.google_id.is_none() {
                return self.users.set_google_id(user.id, &profile.id).await;
            }
            return Ok(user);
        }

        let name = profile
            .name
            .clone()
            .unwrap_or_else(|| local_part(&profile.email).to_string());

        let user = self
            .users
            .create(NewUser {
                email: profile.email.clone(),
                password_hash: None,
                name,
                google_id: Some(profile.id.clone()),
            })
            .await?;

        info!(user_id = user.id, "user registered via google");

        Ok(user)
    }

    /// Looks up a user by id.
    ///
    /// Returns `None` for ids that no longer exist, letting callers treat a
    /// stale session as unauthenticated rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database failure.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
