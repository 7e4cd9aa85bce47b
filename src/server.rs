//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{
    AccountService, GenerationService, SessionService, TrackingService,
};
use crate::config::Config;
use crate::infrastructure::oauth::{GoogleIdentity, IdentityService};
use crate::infrastructure::persistence::{PgQrCodeRepository, PgUserRepository};
use crate::infrastructure::qr_api::MonkeyQrApi;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Google sign-in (when credentials are configured)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let qr_code_repository = Arc::new(PgQrCodeRepository::new(pool.clone()));

    let qr_api = Arc::new(MonkeyQrApi::new(
        config.qr_api_url.clone(),
        config.qr_upload_url.clone(),
    ));

    let identity_service: Option<Arc<dyn IdentityService>> =
        match (&config.google_client_id, &config.google_client_secret) {
            (Some(id), Some(secret)) => {
                tracing::info!("Google sign-in enabled");
                Some(Arc::new(GoogleIdentity::new(
                    id.clone(),
                    secret.clone(),
                    &config.public_base_url,
                )))
            }
            _ => {
                tracing::info!("Google sign-in disabled");
                None
            }
        };

    let state = AppState {
        account_service: Arc::new(AccountService::new(user_repository)),
        session_service: Arc::new(SessionService::new(&config.session_secret)),
        tracking_service: Arc::new(TrackingService::new(qr_code_repository)),
        generation_service: Arc::new(GenerationService::new(
            qr_api,
            config.public_base_url.clone(),
        )),
        identity_service,
        public_base_url: config.public_base_url.clone(),
        cookie_secure: config.cookie_secure,
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Waits for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
