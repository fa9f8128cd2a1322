use log::{debug, info};
use std::time::Instant;

use crate::actions::Action;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Error;
use crate::generator::RandomSource;
use crate::notify::{Notifier, Severity, Toasts};
use crate::session::Session;
use crate::ui::{self, FormCommand};

/// The interactive password form.
pub struct FormAction;

struct Form {
    session: Session,
    toasts: Toasts,
}

impl Form {
    fn new() -> Form {
        Form {
            session: Session::new(),
            toasts: Toasts::new(),
        }
    }

    /// Applies one command. Returns false once the user quits.
    fn handle(
        &mut self,
        command: FormCommand,
        rng: &mut dyn RandomSource,
        clipboard: &mut dyn Clipboard,
    ) -> bool {
        debug!("handling {:?}", command);
        match command {
            FormCommand::Toggle(class) => self.session.toggle(class),
            FormCommand::SetLength(length) => self.session.set_length(length),
            FormCommand::Generate => {
                self.session.generate(rng, &mut self.toasts);
            }
            FormCommand::Copy => {
                self.session.copy(clipboard, &mut self.toasts);
            }
            FormCommand::Dismiss(None) => self.toasts.dismiss_all(),
            FormCommand::Dismiss(Some(index)) => {
                if !self.toasts.dismiss(index) {
                    self.toasts
                        .notify(&format!("No notification {}", index), Severity::Error);
                }
            }
            FormCommand::Help => ui::show_help(),
            FormCommand::Invalid(message) => self.toasts.notify(&message, Severity::Error),
            FormCommand::Quit => return false,
        }
        true
    }
}

impl Action for FormAction {
    fn run(&self) -> Result<(), Error> {
        info!("opening password form");
        let mut form = Form::new();
        let mut rng = rand::thread_rng();
        let mut clipboard = SystemClipboard::new();
        loop {
            ui::show_form(
                form.session.config(),
                form.session.password(),
                form.toasts.active(Instant::now()),
            );
            let line = match ui::ask("Enter a command (h for help): ")? {
                Some(line) => line,
                None => break,
            };
            if !form.handle(ui::parse_command(&line), &mut rng, &mut clipboard) {
                break;
            }
        }
        Ok(())
    }
}
