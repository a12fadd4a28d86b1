//! Terminal clipboard via the OSC 52 escape sequence.

use crate::domain::ports::{Clipboard, ClipboardError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{self, IsTerminal, Stdout, Write};
use std::sync::Mutex;

/// Largest encoded payload most terminals accept in one OSC 52 sequence.
pub const MAX_OSC52_PAYLOAD: usize = 100_000;

/// Writes text to the system clipboard through the controlling terminal.
///
/// The terminal emulator receives `ESC ] 52 ; c ; <base64> BEL` and places the
/// decoded text on the clipboard. Works over SSH and inside tmux when the
/// terminal allows clipboard access.
pub struct Osc52Clipboard<W: Write + Send> {
    writer: Mutex<W>,
    require_terminal: bool,
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard bound to standard output.
    ///
    /// Writes fail with [`ClipboardError::Unavailable`] when stdout is not a
    /// terminal, since the sequence would otherwise end up in a pipe or file.
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(io::stdout()),
            require_terminal: true,
        }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    /// Clipboard writing to an arbitrary sink, without the terminal check.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            require_terminal: false,
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Builds the escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.require_terminal && !io::stdout().is_terminal() {
            return Err(ClipboardError::Unavailable(
                "standard output is not a terminal".to_string(),
            ));
        }

        let sequence = osc52_sequence(text);
        if sequence.len() > MAX_OSC52_PAYLOAD {
            return Err(ClipboardError::PayloadTooLarge {
                size: sequence.len(),
                max: MAX_OSC52_PAYLOAD,
            });
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard writer poisoned".to_string()))?;
        writer.write_all(sequence.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
