//! Handlers for the country endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::countries::{CountryDto, CountryListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every selectable country.
///
/// # Endpoint
///
/// `GET /api/countries`
///
/// # Response
///
/// ```json
/// {
///   "total": 245,
///   "items": [
///     { "code": "AF", "dial_prefix": "93", "region_name": "Afghanistan", "label": "🇦🇫 Afghanistan - 93" }
///   ]
/// }
/// ```
pub async fn country_list_handler(State(state): State<AppState>) -> Json<CountryListResponse> {
    let items: Vec<CountryDto> = state
        .link_service
        .countries()
        .into_iter()
        .map(CountryDto::from)
        .collect();

    Json(CountryListResponse {
        total: items.len(),
        items,
    })
}

/// Returns a single country.
///
/// # Endpoint
///
/// `GET /api/countries/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is not in the registry.
pub async fn country_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CountryDto>, AppError> {
    let entry = state.link_service.country(&code)?;
    Ok(Json(entry.into()))
}
