//! Domain entity for a generated `wa.me` link.

use url::Url;

/// Base of every generated link.
pub const WA_ME_BASE: &str = "https://wa.me/";

/// The result of deriving a link from a [`super::FormInput`] snapshot.
///
/// Computed on demand and never stored; two derivations of the same input
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLink {
    /// Dial prefix followed by the normalized national number.
    pub canonical_number: String,
    /// Full link, e.g. `https://wa.me/6281234567890?text=Hi%20there`.
    pub url: String,
}

impl DerivedLink {
    /// Parses [`Self::url`] with the `url` crate.
    ///
    /// Every path and query component is percent-encoded during derivation,
    /// so this succeeds for any input.
    pub fn parse(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }

    /// Returns the still-encoded `text` query value, if a message was attached.
    pub fn encoded_text(&self) -> Option<&str> {
        self.url
            .split_once('?')
            .and_then(|(_, query)| query.strip_prefix("text="))
    }
}
