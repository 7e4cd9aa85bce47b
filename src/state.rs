use std::sync::Arc;

use crate::application::services::{
    AccountService, GenerationService, SessionService, TrackingService,
};
use crate::infrastructure::oauth::IdentityService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub session_service: Arc<SessionService>,
    pub tracking_service: Arc<TrackingService>,
    pub generation_service: Arc<GenerationService>,
    /// None when Google credentials are not configured; the Google
    /// handlers answer 404 in that case.
    pub identity_service: Option<Arc<dyn IdentityService>>,
    pub public_base_url: String,
    pub cookie_secure: bool,
}
