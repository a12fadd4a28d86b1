//! Handler for the link derivation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::link::{LinkRequest, LinkResponse};
use crate::domain::entities::FormInput;
use crate::error::AppError;
use crate::state::AppState;

/// Recomputes validity and the `wa.me` link for the current form values.
///
/// # Endpoint
///
/// `POST /api/link`
///
/// # Request Body
///
/// ```json
/// {
///   "country_code": "ID",
///   "phone_number": "081234567890",
///   "text": "Hi there"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "valid": true,
///   "errors": [],
///   "canonical_number": "6281234567890",
///   "url": "https://wa.me/6281234567890?text=Hi%20there"
/// }
/// ```
///
/// An invalid form is a normal response (`200`, `valid: false`, link fields
/// `null`).
///
/// # Errors
///
/// Returns 400 Bad Request if a field exceeds its length limit.
pub async fn link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let input = FormInput::from(payload);
    let snapshot = state.link_service.snapshot(&input);

    Ok(Json(snapshot.into()))
}
