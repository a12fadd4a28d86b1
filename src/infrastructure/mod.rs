//! Infrastructure layer: concrete implementations of the domain ports.
//!
//! - [`registry`] - Country tables loaded from bundled or on-disk JSON
//! - [`clipboard`] - Terminal clipboard access
//! - [`notifier`] - Terminal notifications

pub mod clipboard;
pub mod notifier;
pub mod registry;
