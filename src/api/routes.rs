//! API route configuration.

use crate::api::handlers::{country_handler, country_list_handler, link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. They are public; abuse is limited by
/// [`crate::api::middleware::rate_limit`] when enabled.
///
/// # Endpoints
///
/// - `POST /link`             - Validate form values and derive the link
/// - `GET  /countries`        - List selectable countries
/// - `GET  /countries/{code}` - Look up one country
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/link", post(link_handler))
        .route("/countries", get(country_list_handler))
        .route("/countries/{code}", get(country_handler))
}
