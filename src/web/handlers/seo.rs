//! Crawler files generated from the configured site URL.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /robots.txt`
pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.site.robots_txt(),
    )
}

/// `GET /sitemap.xml`
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.site.sitemap_xml(),
    )
}
