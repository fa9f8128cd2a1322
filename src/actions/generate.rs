use clap::ArgMatches;
use log::debug;

use crate::actions::Action;
use crate::clipboard::SystemClipboard;
use crate::config::Configuration;
use crate::error::Error;
use crate::notify::ConsoleNotifier;
use crate::session::Session;

pub struct GenerateAction {
    pub config: Configuration,
    pub copy: bool,
}

impl GenerateAction {
    pub fn new(matches: &ArgMatches) -> GenerateAction {
        GenerateAction {
            config: Configuration::new_from_args(matches),
            copy: matches.get_one::<bool>("copy").map_or(false, |v| *v),
        }
    }
}

impl Action for GenerateAction {
    fn run(&self) -> Result<(), Error> {
        debug!("generating with {:?}", self.config);
        let mut session = Session::with_config(self.config.clone());
        let mut notifier = ConsoleNotifier;
        let mut rng = rand::thread_rng();
        if let Some(password) = session.generate(&mut rng, &mut notifier) {
            println!("{}", password);
            if self.copy {
                session.copy(&mut SystemClipboard::new(), &mut notifier);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharClass;

    #[test]
    fn test_new_from_matches() {
        let matches =
            crate::cli().get_matches_from(["passforge", "gen", "-l", "-s", "-c", "-n", "9"]);
        let (_, sub_matches) = matches.subcommand().unwrap();
        let action = GenerateAction::new(sub_matches);
        assert!(action.copy);
        assert_eq!(action.config.length, 9);
        assert_eq!(
            action.config.enabled_classes(),
            vec![CharClass::Lower, CharClass::Symbol]
        );
    }

    #[test]
    fn test_run_without_classes_is_not_fatal() {
        let matches = crate::cli().get_matches_from(["passforge", "gen"]);
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert!(GenerateAction::new(sub_matches).run().is_ok());
    }
}
