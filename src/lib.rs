//! # WhatsApp Link Helper
//!
//! Turns a country, a phone number and an optional message into a
//! `https://wa.me/...` deep link, served as a small web form, a JSON API and a
//! command-line tool.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, collaborator ports and the validation gate
//! - **Application Layer** ([`application`]) - Link derivation and the copy flow
//! - **Infrastructure Layer** ([`infrastructure`]) - Country tables, clipboard, notifications
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML form, 404 page, robots.txt and sitemap
//!
//! ## Link Derivation
//!
//! ```text
//! country "ID" (dial prefix 62) + phone "081234567890" + text "Hi there"
//!   -> canonical number 6281234567890
//!   -> https://wa.me/6281234567890?text=Hi%20there
//! ```
//!
//! Derivation is total: unknown countries use an empty prefix and invalid
//! forms still produce a (suppressed) link.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the web server on 0.0.0.0:3000
//! cargo run
//!
//! # Or derive a link in the terminal
//! cargo run --bin walink -- link --country ID --phone 081234567890 --text "Hi there"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CopyOutcome, FormSnapshot, LinkService};
    pub use crate::domain::entities::{CountryEntry, DerivedLink, FormInput};
    pub use crate::domain::ports::{Clipboard, CountryRegistry, Notification, Notifier};
    pub use crate::error::AppError;
    pub use crate::infrastructure::registry::StaticCountryRegistry;
    pub use crate::state::AppState;
    pub use crate::utils::SeparatorPolicy;
}
