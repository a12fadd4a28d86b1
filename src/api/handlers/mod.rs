//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod countries;
pub mod health;
pub mod link;

pub use countries::{country_handler, country_list_handler};
pub use health::health_handler;
pub use link::link_handler;
