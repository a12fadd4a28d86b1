//! Port for the read-only country dialing table.

use crate::domain::entities::CountryEntry;

/// Errors raised while loading or querying a country table.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Country code not found: {0}")]
    NotFound(String),

    #[error("Failed to read country table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed country table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid country table entry '{code}': {reason}")]
    InvalidEntry { code: String, reason: String },
}

/// Read-only lookup over the country dialing table.
///
/// The table is loaded once and injected wherever it is needed, so tests can
/// substitute their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::StaticCountryRegistry`] - JSON-backed table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CountryRegistry: Send + Sync {
    /// Resolves a country code to its dial prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is not in the table.
    fn lookup(&self, country_code: &str) -> Result<String, RegistryError>;

    /// Returns the full entry for a country code, if present.
    fn entry(&self, country_code: &str) -> Option<CountryEntry>;

    /// All entries ordered by display label.
    fn list_all(&self) -> Vec<CountryEntry>;
}
