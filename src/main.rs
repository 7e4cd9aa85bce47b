//! Service entrypoint: loads configuration, sets up logging, runs the server.

use qrify::{config, server};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);

    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber.
///
/// `log_level` accepts any `RUST_LOG` directive string. When `log_format`
/// is `json`, log lines are emitted as structured JSON for log collectors.
fn init_tracing(log_level: &str, log_format: &str) {
    let env_filter = EnvFilter::new(log_level);

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
