//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /redirect/{trackingId}` - Scan redirect with counter bump (public)
//! - `GET /health`                - Health check: database connectivity (public)
//! - `/qr/*`                      - QR generation, upload and history
//! - `/auth*`                     - Registration, login, session, Google OAuth
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling
//!
//! The redirect and health endpoints are left unlimited: scans are the
//! hot path and several people scanning the same poster often share one
//! NAT address.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let qr_routes = if behind_proxy {
        api::routes::public_routes().layer(rate_limit::smart_layer())
    } else {
        api::routes::public_routes().layer(rate_limit::layer())
    };

    let auth_routes = if behind_proxy {
        api::routes::auth_routes().layer(rate_limit::secure_smart_layer())
    } else {
        api::routes::auth_routes().layer(rate_limit::secure_layer())
    };

    let router = Router::new()
        .route("/redirect/{tracking_id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(qr_routes)
        .merge(auth_routes)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
