//! HTTP server initialization and runtime setup.
//!
//! Handles registry loading, state construction and the Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::ports::CountryRegistry;
use crate::infrastructure::registry::StaticCountryRegistry;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::site::SiteMeta;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Country registry (bundled or from `COUNTRY_TABLE_PATH`)
/// - Link service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The country table cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = StaticCountryRegistry::load(config.country_table_path.as_deref())
        .context("Failed to load country table")?;
    tracing::info!("Country registry loaded ({} countries)", registry.len());

    if registry.entry(&config.default_country).is_none() {
        tracing::warn!(
            "DEFAULT_COUNTRY '{}' is not in the country table; the form will open without a country",
            config.default_country
        );
    }

    let link_service = Arc::new(LinkService::new(
        Arc::new(registry),
        config.separator_policy,
    ));
    let site = Arc::new(SiteMeta::new(&config.site_url));
    let state = AppState::new(link_service, site, config.default_country.clone());

    let app = app_router(state, config.rate_limit, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
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
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
