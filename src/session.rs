use log::{debug, info, warn};

use crate::charset::CharClass;
use crate::clipboard::Clipboard;
use crate::config::Configuration;
use crate::generator::{generate, RandomSource};
use crate::notify::{Notifier, Severity, COPY_MESSAGE};

/// State behind the form: the selections and the password currently on display.
#[derive(Debug, Default)]
pub struct Session {
    config: Configuration,
    password: String,
}

impl Session {
    pub fn new() -> Session {
        Session::with_config(Configuration::default())
    }

    pub fn with_config(config: Configuration) -> Session {
        Session {
            config,
            password: String::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_length(&mut self, length: usize) {
        self.config.set_length(length);
        debug!("length set to {}", self.config.length);
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.config.set_class(class, enabled);
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.config.toggle(class);
        debug!("{} enabled: {}", class, self.config.is_enabled(class));
    }

    /// Replaces the displayed password with a fresh one. When no class is
    /// selected an error is raised instead and the current password stays.
    pub fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        notifier: &mut dyn Notifier,
    ) -> Option<&str> {
        match generate(&self.config.enabled_classes(), self.config.length, rng) {
            Ok(password) => {
                info!("generated a password of length {}", self.config.length);
                self.password = password;
                Some(&self.password)
            }
            Err(e) => {
                notifier.notify(&e.to_string(), Severity::Error);
                None
            }
        }
    }

    /// Copies the displayed password, even when it is empty.
    pub fn copy(&self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) -> bool {
        match clipboard.write_text(&self.password) {
            Ok(_) => {
                notifier.notify(COPY_MESSAGE, Severity::Success);
                true
            }
            Err(e) => {
                warn!("clipboard write failed: {}", e);
                notifier.notify(
                    &format!("Failed to copy password: {}", e),
                    Severity::Error,
                );
                false
            }
        }
    }
}
