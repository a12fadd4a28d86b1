//! Fallback handler for unknown paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::state::AppState;
use crate::web::site::SiteMeta;

/// Template for the 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub site: Arc<SiteMeta>,
    pub title: String,
}

/// Renders the "Page not Found" page with a `404` status.
pub async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    let template = NotFoundTemplate {
        title: state.site.page_title("Page not Found"),
        site: state.site.clone(),
    };

    (StatusCode::NOT_FOUND, template)
}
