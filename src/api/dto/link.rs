//! DTOs for the link derivation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::FormSnapshot;
use crate::domain::entities::FormInput;
use crate::domain::validation::FieldError;

/// Longest accepted `country_code`.
pub const MAX_COUNTRY_CODE_LEN: u64 = 16;
/// Longest accepted `phone_number`; also the `maxlength` of the form input.
pub const MAX_PHONE_NUMBER_LEN: u64 = 64;
/// Longest accepted `text`; also the `maxlength` of the form input.
pub const MAX_TEXT_LEN: u64 = 4096;

/// Current form values, sent after every field change.
///
/// Missing fields are treated as empty so a half-filled form still gets a
/// response. Length limits only guard against oversized requests; the form
/// constraints themselves are reported in [`LinkResponse::errors`].
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    #[serde(default)]
    #[validate(length(max = MAX_COUNTRY_CODE_LEN))]
    pub country_code: String,

    #[serde(default)]
    #[validate(length(max = MAX_PHONE_NUMBER_LEN))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub text: String,
}

impl From<LinkRequest> for FormInput {
    fn from(request: LinkRequest) -> Self {
        FormInput::new(request.country_code, request.phone_number, request.text)
    }
}

/// Validity of the submitted form and, when valid, the derived link.
///
/// `canonical_number` and `url` are `null` while the form is invalid.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    pub canonical_number: Option<String>,
    pub url: Option<String>,
}

impl From<FormSnapshot> for LinkResponse {
    fn from(snapshot: FormSnapshot) -> Self {
        let valid = snapshot.is_valid();
        let errors = snapshot.validity.errors().to_vec();
        let (canonical_number, url) = if valid {
            (
                Some(snapshot.link.canonical_number),
                Some(snapshot.link.url),
            )
        } else {
            (None, None)
        };

        Self {
            valid,
            errors,
            canonical_number,
            url,
        }
    }
}
