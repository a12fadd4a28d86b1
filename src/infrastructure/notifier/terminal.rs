//! Terminal notification sink.

use crate::domain::ports::{Notification, NotificationKind, Notifier};
use colored::Colorize;

/// Prints notifications to standard error.
///
/// Standard output is left for the link itself so the command can be piped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Renders a notification as one coloured line.
pub fn render(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => format!(
            "{} {}",
            format!("✔ {}:", notification.title).green().bold(),
            notification.body
        ),
        NotificationKind::Failure => format!(
            "{} {}",
            format!("✘ {}:", notification.title).red().bold(),
            notification.body
        ),
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", render(notification));
    }
}
