//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod generation;
pub mod google;
pub mod health;
pub mod history;
pub mod redirect;
pub mod upload;

pub use auth::{auth_handler, logout_handler, me_handler};
pub use generation::generation_handler;
pub use google::{google_callback_handler, google_login_handler};
pub use health::health_handler;
pub use history::{delete_qr_handler, list_history_handler, save_qr_handler};
pub use redirect::redirect_handler;
pub use upload::upload_logo_handler;
