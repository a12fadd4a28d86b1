//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, robots_handler, sitemap_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Link form
/// - `GET /robots.txt` - Crawler rules
/// - `GET /sitemap.xml` - Sitemap
///
/// Unknown paths are answered by [`crate::web::handlers::not_found_handler`],
/// installed as the application fallback.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
}
