//! DTOs for the country endpoints.

use serde::Serialize;

use crate::domain::entities::CountryEntry;

/// A country as exposed by the API, including its display label.
#[derive(Debug, Serialize)]
pub struct CountryDto {
    pub code: String,
    pub dial_prefix: String,
    pub region_name: String,
    pub label: String,
}

impl From<CountryEntry> for CountryDto {
    fn from(entry: CountryEntry) -> Self {
        Self {
            label: entry.display_label(),
            code: entry.code,
            dial_prefix: entry.dial_prefix,
            region_name: entry.region_name,
        }
    }
}

/// All countries, ordered by label.
#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub total: usize,
    pub items: Vec<CountryDto>,
}
