use clap::ArgMatches;

use crate::charset::CharClass;

/// The user's current form selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl Configuration {
    pub const MIN_LENGTH: usize = 5;
    pub const MAX_LENGTH: usize = 25;
    pub const DEFAULT_LENGTH: usize = 20;

    /// Builds the configuration of the `gen` subcommand. Length bounds are enforced by clap.
    pub fn new_from_args(matches: &ArgMatches) -> Configuration {
        let flag = |name: &str| matches.get_one::<bool>(name).map_or(false, |v| *v);
        let mut config = Configuration {
            include_upper: flag("uppercase"),
            include_lower: flag("lowercase"),
            include_digits: flag("digits"),
            include_symbols: flag("symbols"),
            ..Configuration::default()
        };
        if let Some(length) = matches.get_one::<u8>("length") {
            config.set_length(*length as usize);
        }
        config
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_upper,
            CharClass::Lower => self.include_lower,
            CharClass::Digit => self.include_digits,
            CharClass::Symbol => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let field = match class {
            CharClass::Upper => &mut self.include_upper,
            CharClass::Lower => &mut self.include_lower,
            CharClass::Digit => &mut self.include_digits,
            CharClass::Symbol => &mut self.include_symbols,
        };
        *field = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set_class(class, !self.is_enabled(class));
    }

    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }
}
