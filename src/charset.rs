use std::fmt::{Display, Formatter};

pub const UP_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOW_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*(){}[]-_+=/?><|";

/// One of the four disjoint character sets a password can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in the order they are concatenated into the working alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Upper => UP_CASE,
            CharClass::Lower => LOW_CASE,
            CharClass::Digit => NUMBERS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CharClass::Upper => "Uppercase Letters",
            CharClass::Lower => "Lowercase Letters",
            CharClass::Digit => "Numbers",
            CharClass::Symbol => "Symbols",
        };
        write!(f, "{}", label)
    }
}

/// Concatenates the enabled classes in the fixed upper, lower, digit, symbol order.
/// Caller order and duplicates in `classes` are ignored.
pub fn working_alphabet(classes: &[CharClass]) -> Vec<char> {
    CharClass::ALL
        .iter()
        .filter(|class| classes.contains(class))
        .flat_map(|class| class.chars().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in CharClass::ALL.iter().skip(i + 1) {
                assert!(
                    !a.chars().chars().any(|c| b.chars().contains(c)),
                    "{} and {} overlap",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(UP_CASE.len(), 26);
        assert_eq!(LOW_CASE.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SYMBOLS.len(), 23);
    }

    #[test]
    fn test_working_alphabet_uses_fixed_order() {
        let alphabet: String = working_alphabet(&[CharClass::Symbol, CharClass::Upper])
            .into_iter()
            .collect();
        assert_eq!(alphabet, format!("{}{}", UP_CASE, SYMBOLS));
    }

    #[test]
    fn test_working_alphabet_ignores_duplicates() {
        let alphabet = working_alphabet(&[CharClass::Digit, CharClass::Digit]);
        assert_eq!(alphabet.len(), 10);
    }

    #[test]
    fn test_working_alphabet_empty() {
        assert!(working_alphabet(&[]).is_empty());
    }
}
