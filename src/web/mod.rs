//! Web layer for the browser UI.
//!
//! Renders the link form and the 404 page with Askama templates and serves
//! the crawler files.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`site`] - Site metadata shared by templates

pub mod handlers;
pub mod routes;
pub mod site;
