//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::web::site::SiteMeta;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub site: Arc<SiteMeta>,
    /// Country preselected when the form is opened without one.
    pub default_country: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        site: Arc<SiteMeta>,
        default_country: impl Into<String>,
    ) -> Self {
        Self {
            link_service,
            site,
            default_country: default_country.into(),
        }
    }
}
