//! Trait definitions for the collaborators the core depends on.
//!
//! Implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.
//!
//! - [`CountryRegistry`] - Country code to dial prefix lookup
//! - [`Clipboard`] / [`Notifier`] - Side effects of the copy action

pub mod clipboard;
pub mod country_registry;

pub use clipboard::{Clipboard, ClipboardError, Notification, NotificationKind, Notifier};
pub use country_registry::{CountryRegistry, RegistryError};

#[cfg(test)]
pub use clipboard::{MockClipboard, MockNotifier};
#[cfg(test)]
pub use country_registry::MockCountryRegistry;
