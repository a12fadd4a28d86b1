//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Link form (HTML)
//! - `GET  /robots.txt`   - Crawler rules
//! - `GET  /sitemap.xml`  - Sitemap
//! - `GET  /health`       - Health check
//! - `/api/*`             - JSON API
//! - `/static/*`          - Static assets
//! - anything else        - 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limited` - when `true`, `/api` is rate limited per peer IP; the
///   server must then be started with connect info
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, rate_limited: bool, static_dir: &str) -> NormalizePath<Router> {
    let mut api_router = api::routes::routes();
    if rate_limited {
        api_router = api_router.layer(rate_limit::layer());
    }

    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
