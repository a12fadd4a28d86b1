//! Notification sinks.

mod terminal;

pub use terminal::{TerminalNotifier, render};
