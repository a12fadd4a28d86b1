//! HTML and crawler-file handlers.

mod home;
mod not_found;
mod seo;

pub use home::{HomeQuery, home_handler};
pub use not_found::not_found_handler;
pub use seo::{robots_handler, sitemap_handler};
