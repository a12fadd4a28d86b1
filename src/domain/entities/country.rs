//! Domain entity representing one row of the country dialing table.

use crate::utils::flag::flag_glyph;

/// A country (or region) that can be selected in the link form.
///
/// Entries are built once when the registry loads and never change afterwards.
/// The display label is derived on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    /// Region identifier, upper-case (e.g. `"ID"`).
    pub code: String,
    /// International dialing prefix, digits only (e.g. `"62"`).
    pub dial_prefix: String,
    /// English region name, or the code itself when no name is known.
    pub region_name: String,
}

impl CountryEntry {
    /// Creates a new CountryEntry instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let entry = CountryEntry::new("ID", "62", "Indonesia");
    /// assert_eq!(entry.display_label(), "🇮🇩 Indonesia - 62");
    /// ```
    pub fn new(
        code: impl Into<String>,
        dial_prefix: impl Into<String>,
        region_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            dial_prefix: dial_prefix.into(),
            region_name: region_name.into(),
        }
    }

    /// Human-readable label: flag glyph, region name and dial prefix.
    ///
    /// Codes without a flag glyph render as `"<name> - <prefix>"`.
    pub fn display_label(&self) -> String {
        match flag_glyph(&self.code) {
            Some(flag) => format!("{} {} - {}", flag, self.region_name, self.dial_prefix),
            None => format!("{} - {}", self.region_name, self.dial_prefix),
        }
    }
}
