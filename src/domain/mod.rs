//! Domain layer: entities, collaborator ports and the validation gate.
//!
//! # Architecture
//!
//! - [`entities`] - Country entries, form snapshots and derived links
//! - [`ports`] - Registry, clipboard and notifier traits
//! - [`validation`] - The form validation gate
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Link derivation itself lives in
//! [`crate::application::services::LinkService`].

pub mod entities;
pub mod ports;
pub mod validation;
