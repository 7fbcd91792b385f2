//! Tardiness Engine HTTP server.
//!
//! Environment:
//! - `TARDINESS_CONFIG`: path to `policy.yaml` (built-in defaults when unset)
//! - `TARDINESS_BIND`: listen address, default `0.0.0.0:8080`
//! - `TARDINESS_LOG_JSON`: emit JSON logs when `true`
//! - `RUST_LOG`: log filter, default `info`

use std::env;

use tardiness_engine::api::{AppState, create_router};
use tardiness_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("TARDINESS_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("TARDINESS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let config = match env::var("TARDINESS_CONFIG") {
        Ok(path) => ConfigLoader::load(&path).map_err(|e| e.to_string())?,
        Err(_) => ConfigLoader::default(),
    };

    let settings = config.settings();
    info!(
        institution = %settings.institution(),
        cutoff = %settings.cutoff(),
        utc_offset_minutes = settings.utc_offset_minutes(),
        submission_policy = ?settings.submission_policy(),
        "Policy loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {} failed: {}", bind_addr, e))?;
    info!(bind_addr = %bind_addr, "Tardiness engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| e.to_string())
}
