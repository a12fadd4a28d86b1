//! Link form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::dto::link::{MAX_PHONE_NUMBER_LEN, MAX_TEXT_LEN};
use crate::domain::entities::{CountryEntry, FormInput};
use crate::domain::validation::FieldError;
use crate::state::AppState;
use crate::web::site::SiteMeta;

/// Query parameters prefilling the form.
///
/// The form submits to `/` with `GET`, so without JavaScript the page is
/// re-rendered with the derived link for the submitted values.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub text: Option<String>,
}

impl HomeQuery {
    fn submitted(&self) -> bool {
        self.country_code.is_some() || self.phone_number.is_some() || self.text.is_some()
    }
}

/// One `<option>` of the country select.
pub struct CountryOption {
    pub code: String,
    pub label: String,
    pub selected: bool,
}

impl CountryOption {
    fn from_entry(entry: CountryEntry, selected_code: &str) -> Self {
        Self {
            selected: entry.code.eq_ignore_ascii_case(selected_code.trim()),
            label: entry.display_label(),
            code: entry.code,
        }
    }
}

/// Template for the link form.
///
/// Renders `templates/home.html` with:
/// - Country select, phone number and message inputs
/// - Copy button, disabled while the form is invalid
/// - Link preview, hidden while the form is invalid
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: Arc<SiteMeta>,
    pub title: String,
    pub countries: Vec<CountryOption>,
    pub no_country_selected: bool,
    pub phone_number: String,
    pub text: String,
    pub phone_max_len: u64,
    pub text_max_len: u64,
    pub is_valid: bool,
    pub link_url: String,
    pub show_errors: bool,
    pub errors: Vec<FieldError>,
}

/// Renders the link form.
///
/// # Endpoint
///
/// `GET /?country_code=ID&phone_number=0812...&text=...`
///
/// All parameters are optional; a missing country falls back to the
/// configured default. Field errors are only shown once the form has been
/// submitted.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let submitted = query.submitted();
    let input = FormInput {
        country_code: query
            .country_code
            .unwrap_or_else(|| state.default_country.clone()),
        phone_number: query.phone_number.unwrap_or_default(),
        text: query.text.unwrap_or_default(),
    };

    let snapshot = state.link_service.snapshot(&input);

    let countries: Vec<CountryOption> = state
        .link_service
        .countries()
        .into_iter()
        .map(|entry| CountryOption::from_entry(entry, &input.country_code))
        .collect();
    let no_country_selected = !countries.iter().any(|option| option.selected);

    HomeTemplate {
        title: state.site.name.to_string(),
        site: state.site.clone(),
        countries,
        no_country_selected,
        phone_max_len: MAX_PHONE_NUMBER_LEN,
        text_max_len: MAX_TEXT_LEN,
        is_valid: snapshot.is_valid(),
        link_url: snapshot
            .visible_link()
            .map(|link| link.url.clone())
            .unwrap_or_default(),
        show_errors: submitted,
        errors: snapshot.validity.errors().to_vec(),
        phone_number: input.phone_number,
        text: input.text,
    }
}
