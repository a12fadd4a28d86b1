//! Utility functions shared by the link derivation core and its front-ends.
//!
//! - [`phone_normalizer`] - Phone number cleanup before prefixing
//! - [`flag`] - Flag emoji derivation for region codes

pub mod flag;
pub mod phone_normalizer;

pub use phone_normalizer::{SeparatorPolicy, normalize_phone_number};
