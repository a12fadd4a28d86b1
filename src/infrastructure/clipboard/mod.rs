//! Clipboard implementations.

mod osc52;

pub use osc52::{MAX_OSC52_PAYLOAD, Osc52Clipboard, osc52_sequence};
