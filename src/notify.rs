use log::{info, warn};
use std::time::{Duration, Instant};

pub const COPY_MESSAGE: &str = "Password Copied Successfully!";

/// Toasts close themselves after this long.
pub const AUTO_CLOSE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget signal to the user. Rendering and timing belong to the implementor.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Prints notifications right away, errors to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("{}", message),
            Severity::Error => eprintln!("Error: {}", message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    raised_at: Instant,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= AUTO_CLOSE
    }
}

/// Notification area of the interactive form. Toasts stack oldest first
/// and drop out once `AUTO_CLOSE` has passed or when dismissed.
#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Toasts {
        Toasts { items: Vec::new() }
    }

    pub fn push_at(&mut self, message: &str, severity: Severity, now: Instant) {
        self.items.push(Toast {
            message: message.to_string(),
            severity,
            raised_at: now,
        });
    }

    /// Drops expired toasts and returns the ones still showing.
    pub fn active(&mut self, now: Instant) -> &[Toast] {
        self.items.retain(|toast| !toast.is_expired(now));
        &self.items
    }

    pub fn dismiss(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => info!("{}", message),
            Severity::Error => warn!("{}", message),
        }
        self.push_at(message, severity, Instant::now());
    }
}
