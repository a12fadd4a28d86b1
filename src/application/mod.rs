//! Application layer services implementing the link helper's behaviour.
//!
//! Services consume domain ports and provide a small API for the HTTP
//! handlers and the command-line front-end.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link derivation, validation and copying

pub mod services;
