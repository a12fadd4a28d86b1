//! Core domain entities of the link helper.
//!
//! # Entity Types
//!
//! - [`CountryEntry`] - A row of the country dialing table
//! - [`FormInput`] - The raw form fields as currently typed
//! - [`DerivedLink`] - The canonical number and `wa.me` URL derived from a form

pub mod country;
pub mod derived_link;
pub mod form_input;

pub use country::CountryEntry;
pub use derived_link::{DerivedLink, WA_ME_BASE};
pub use form_input::FormInput;
