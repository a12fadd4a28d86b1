//! Snapshot of the link form as the user currently has it filled in.

use serde::{Deserialize, Serialize};

/// The three form fields, passed by value into the core on every change.
///
/// Nothing here is normalized: the phone number is kept exactly as typed,
/// including leading zeros and separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub text: String,
}

impl FormInput {
    pub fn new(
        country_code: impl Into<String>,
        phone_number: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            phone_number: phone_number.into(),
            text: text.into(),
        }
    }
}
