pub mod form;
pub mod generate;

pub use form::FormAction;
pub use generate::GenerateAction;

use clap::Command;
use std::io::{self, Write};

use crate::error::Error;

pub trait Action {
    fn run(&self) -> Result<(), Error> {
        Ok(())
    }
}

pub struct PrintHelpAction {
    cli: Command,
}

impl PrintHelpAction {
    pub fn new(cli: Command) -> PrintHelpAction {
        PrintHelpAction { cli }
    }

    pub fn write_help(&self, out: &mut impl Write) -> io::Result<()> {
        self.cli.clone().write_help(out)
    }
}

impl Action for PrintHelpAction {
    fn run(&self) -> Result<(), Error> {
        let mut out = io::stdout();
        self.write_help(&mut out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_subcommands() {
        let mut out = Vec::new();
        PrintHelpAction::new(crate::cli()).write_help(&mut out).unwrap();
        let help = String::from_utf8(out).unwrap();
        assert!(!help.is_empty());
        assert!(help.contains("Usage"));
        assert!(help.contains("gen"));
    }
}
