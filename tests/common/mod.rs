#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::header::SET_COOKIE;
use axum_test::TestResponse;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use qrify::application::services::{
    AccountService, GenerationService, SessionService, TrackingService,
};
use qrify::domain::entities::{NewQrCode, NewUser, QrCode, User};
use qrify::domain::repositories::{QrCodeRepository, UserRepository};
use qrify::error::AppError;
use qrify::infrastructure::oauth::{ExternalProfile, IdentityService};
use qrify::infrastructure::qr_api::QrApiService;
use qrify::state::AppState;

/// In-memory stand-in for the Postgres user repository.
///
/// Mirrors the storage semantics the handlers rely on: emails are stored
/// lowercased and looked up case-insensitively.
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let email = new_user.email.to_lowercase();
        if rows.iter().any(|u| u.email == email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            google_id: new_user.google_id,
            created_at: Utc::now(),
        };
        rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();
        let email = email.to_lowercase();

        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn set_google_id(&self, id: i64, google_id: &str) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))?;

        user.google_id = Some(google_id.to_string());

        Ok(user.clone())
    }
}

/// In-memory stand-in for the Postgres QR code repository.
///
/// `set_fail(true)` makes every method report a database error, for testing
/// degraded paths.
pub struct InMemoryQrCodeRepository {
    rows: Mutex<Vec<QrCode>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

impl InMemoryQrCodeRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn scans(&self, tracking_id: &str) -> Option<i64> {
        let rows = self.rows.lock().unwrap();

        rows.iter()
            .find(|qr| qr.tracking_id == tracking_id)
            .map(|qr| qr.scans)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_fail(&self) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        Ok(())
    }
}

#[async_trait]
impl QrCodeRepository for InMemoryQrCodeRepository {
    async fn insert(&self, new_qr_code: NewQrCode) -> Result<QrCode, AppError> {
        self.check_fail()?;
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|qr| qr.tracking_id == new_qr_code.tracking_id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "qr_codes_tracking_id_key" }),
            ));
        }

        let qr_code = QrCode {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            tracking_id: new_qr_code.tracking_id,
            url: new_qr_code.url,
            qr_code: new_qr_code.qr_code,
            user_id: new_qr_code.user_id,
            scans: 0,
            created_at: Utc::now(),
        };
        rows.push(qr_code.clone());

        Ok(qr_code)
    }

    async fn list_for_owner(&self, user_id: i64) -> Result<Vec<QrCode>, AppError> {
        self.check_fail()?;
        let rows = self.rows.lock().unwrap();

        let mut owned: Vec<QrCode> = rows
            .iter()
            .filter(|qr| qr.user_id == Some(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(owned)
    }

    async fn delete_for_owner(&self, tracking_id: &str, user_id: i64) -> Result<bool, AppError> {
        self.check_fail()?;
        let mut rows = self.rows.lock().unwrap();

        let before = rows.len();
        rows.retain(|qr| !(qr.tracking_id == tracking_id && qr.user_id == Some(user_id)));

        Ok(rows.len() < before)
    }

    async fn find_and_increment_scans(
        &self,
        tracking_id: &str,
    ) -> Result<Option<String>, AppError> {
        self.check_fail()?;
        let mut rows = self.rows.lock().unwrap();

        Ok(rows.iter_mut().find(|qr| qr.tracking_id == tracking_id).map(
            |qr| {
                qr.scans += 1;
                qr.url.clone()
            },
        ))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_fail()
    }
}

/// Stub renderer that returns a fixed SVG and records what it was asked for.
pub struct StubQrApi {
    svg: Vec<u8>,
    fail_render: AtomicBool,
    fail_upload: AtomicBool,
    upload_disabled: AtomicBool,
    last_render: Mutex<Option<(String, Value)>>,
    last_upload: Mutex<Option<(String, String, Vec<u8>)>>,
}

pub const STUB_SVG: &[u8] = b"<svg>stub</svg>";

impl StubQrApi {
    pub fn new() -> Self {
        Self {
            svg: STUB_SVG.to_vec(),
            fail_render: AtomicBool::new(false),
            fail_upload: AtomicBool::new(false),
            upload_disabled: AtomicBool::new(false),
            last_render: Mutex::new(None),
            last_upload: Mutex::new(None),
        }
    }

    pub fn set_fail_render(&self, fail: bool) {
        self.fail_render.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_upload(&self, fail: bool) {
        self.fail_upload.store(fail, Ordering::SeqCst);
    }

    pub fn set_upload_disabled(&self, disabled: bool) {
        self.upload_disabled.store(disabled, Ordering::SeqCst);
    }

    /// The `(data, config)` pair of the most recent render call.
    pub fn last_render(&self) -> Option<(String, Value)> {
        self.last_render.lock().unwrap().clone()
    }

    /// The `(file_name, content_type, bytes)` of the most recent upload call.
    pub fn last_upload(&self) -> Option<(String, String, Vec<u8>)> {
        self.last_upload.lock().unwrap().clone()
    }
}

#[async_trait]
impl QrApiService for StubQrApi {
    async fn render(&self, data: &str, config: &Value) -> Result<Vec<u8>, AppError> {
        if self.fail_render.load(Ordering::SeqCst) {
            return Err(AppError::upstream("Failed to generate QR code", json!({})));
        }

        *self.last_render.lock().unwrap() = Some((data.to_string(), config.clone()));

        Ok(self.svg.clone())
    }

    async fn upload_logo(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<Value, AppError> {
        if self.upload_disabled.load(Ordering::SeqCst) {
            return Err(AppError::not_found(
                "Logo upload is not available",
                json!({}),
            ));
        }
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(AppError::upstream("Failed to upload image", json!({})));
        }

        *self.last_upload.lock().unwrap() = Some((file_name, content_type, bytes));

        Ok(json!({ "file": "logo-ref-1.png" }))
    }
}

/// Stub identity provider with a configurable profile.
pub struct StubIdentity {
    profile: Mutex<ExternalProfile>,
    fail: AtomicBool,
}

impl StubIdentity {
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(ExternalProfile {
                id: "google-user-1".to_string(),
                email: "guser@example.com".to_string(),
                name: Some("G User".to_string()),
            }),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_profile(&self, profile: ExternalProfile) {
        *self.profile.lock().unwrap() = profile;
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityService for StubIdentity {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://accounts.example.com/o/oauth2/auth?state={}", state)
    }

    async fn fetch_profile(&self, _code: &str) -> Result<ExternalProfile, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::upstream("Sign-in failed", json!({})));
        }

        Ok(self.profile.lock().unwrap().clone())
    }
}

/// Application state wired to in-memory fakes, with handles kept for
/// assertions.
pub struct TestState {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub qr_codes: Arc<InMemoryQrCodeRepository>,
    pub qr_api: Arc<StubQrApi>,
    pub identity: Arc<StubIdentity>,
}

pub const TEST_BASE_URL: &str = "https://qr.example.com";

pub fn create_test_state() -> TestState {
    let users = Arc::new(InMemoryUserRepository::new());
    let qr_codes = Arc::new(InMemoryQrCodeRepository::new());
    let qr_api = Arc::new(StubQrApi::new());
    let identity = Arc::new(StubIdentity::new());

    let state = AppState {
        account_service: Arc::new(AccountService::new(users.clone())),
        session_service: Arc::new(SessionService::new("test-signing-secret")),
        tracking_service: Arc::new(TrackingService::new(qr_codes.clone())),
        generation_service: Arc::new(GenerationService::new(
            qr_api.clone(),
            TEST_BASE_URL.to_string(),
        )),
        identity_service: Some(identity.clone()),
        public_base_url: TEST_BASE_URL.to_string(),
        cookie_secure: false,
    };

    TestState {
        state,
        users,
        qr_codes,
        qr_api,
        identity,
    }
}

/// Creates a user directly in the fake repository.
pub async fn create_test_user(users: &InMemoryUserRepository, email: &str) -> User {
    users
        .create(NewUser {
            email: email.to_string(),
            password_hash: None,
            name: "Test User".to_string(),
            google_id: None,
        })
        .await
        .unwrap()
}

/// Builds a `Cookie` header value carrying a fresh session for the user.
pub fn session_cookie_for(state: &AppState, user_id: i64) -> String {
    let token = state.session_service.issue(user_id).unwrap();

    format!("auth_token={}", token)
}

/// Extracts a cookie value from the response `Set-Cookie` headers.
pub fn extract_set_cookie(response: &TestResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?;
            let mut parts = pair.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}
