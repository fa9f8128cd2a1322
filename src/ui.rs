use comfy_table::*;
use std::io::{self, Write};

use crate::charset::CharClass;
use crate::config::Configuration;
use crate::notify::{Severity, Toast};

#[derive(Debug, PartialEq, Eq)]
pub enum FormCommand {
    Toggle(CharClass),
    SetLength(usize),
    Generate,
    Copy,
    Dismiss(Option<usize>),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> FormCommand {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let argument = parts.next();
    if parts.next().is_some() {
        return FormCommand::Invalid(format!("Unknown command '{}'", line.trim()));
    }
    match (command, argument) {
        ("u", None) => FormCommand::Toggle(CharClass::Upper),
        ("l", None) => FormCommand::Toggle(CharClass::Lower),
        ("d", None) => FormCommand::Toggle(CharClass::Digit),
        ("s", None) => FormCommand::Toggle(CharClass::Symbol),
        ("g", None) => FormCommand::Generate,
        ("c", None) => FormCommand::Copy,
        ("q", None) => FormCommand::Quit,
        ("h", None) | ("?", None) => FormCommand::Help,
        ("x", None) => FormCommand::Dismiss(None),
        ("x", Some(index)) => match index.parse() {
            Ok(i) => FormCommand::Dismiss(Some(i)),
            Err(_) => FormCommand::Invalid("Please enter a notification number".to_string()),
        },
        ("n", Some(length)) => match length.parse() {
            Ok(n) => FormCommand::SetLength(n),
            Err(_) => FormCommand::Invalid(format!(
                "Password length must be a number between {} and {}",
                Configuration::MIN_LENGTH,
                Configuration::MAX_LENGTH
            )),
        },
        ("", None) => FormCommand::Invalid("Please enter a command".to_string()),
        _ => FormCommand::Invalid(format!("Unknown command '{}'", line.trim())),
    }
}

/// Reads one line from stdin. Returns `None` on end of input.
pub fn ask(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Green)
}

fn checkbox(enabled: bool) -> Cell {
    if enabled {
        Cell::new("[x]").fg(Color::Yellow)
    } else {
        Cell::new("[ ]")
    }
}

pub fn form_table(config: &Configuration, password: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Password Generator"),
        header_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("n"),
        Cell::new("Password Length"),
        Cell::new(config.length.to_string()),
    ]);
    for (key, class) in ["u", "l", "d", "s"].iter().zip(CharClass::ALL.iter()) {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(format!("Include {}", class)),
            checkbox(config.is_enabled(*class)),
        ]);
    }
    table.add_row(vec![
        Cell::new("c"),
        Cell::new("Password"),
        Cell::new(password).fg(Color::Cyan),
    ]);
    table
}

pub fn show_form(config: &Configuration, password: &str, toasts: &[Toast]) {
    println!("{}", form_table(config, password));
    for (index, toast) in toasts.iter().enumerate() {
        let (label, color) = match toast.severity {
            Severity::Success => ("ok", Color::Green),
            Severity::Error => ("error", Color::Red),
        };
        let mut table = Table::new();
        table.add_row(vec![
            Cell::new(index.to_string()).fg(Color::Yellow),
            Cell::new(label).fg(color),
            Cell::new(&toast.message),
        ]);
        println!("{table}");
    }
}

pub fn show_help() {
    println!("u, l, d, s   toggle uppercase, lowercase, numbers, symbols");
    println!(
        "n <length>   set the password length ({}-{})",
        Configuration::MIN_LENGTH,
        Configuration::MAX_LENGTH
    );
    println!("g            generate a password");
    println!("c            copy the password to the clipboard");
    println!("x [number]   dismiss notifications");
    println!("q            quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggles() {
        assert_eq!(parse_command("u"), FormCommand::Toggle(CharClass::Upper));
        assert_eq!(parse_command(" l "), FormCommand::Toggle(CharClass::Lower));
        assert_eq!(parse_command("d"), FormCommand::Toggle(CharClass::Digit));
        assert_eq!(parse_command("s"), FormCommand::Toggle(CharClass::Symbol));
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("g"), FormCommand::Generate);
        assert_eq!(parse_command("c"), FormCommand::Copy);
        assert_eq!(parse_command("q"), FormCommand::Quit);
        assert_eq!(parse_command("?"), FormCommand::Help);
        assert_eq!(parse_command("x"), FormCommand::Dismiss(None));
        assert_eq!(parse_command("x 2"), FormCommand::Dismiss(Some(2)));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_command("n 12"), FormCommand::SetLength(12));
        assert!(matches!(parse_command("n twelve"), FormCommand::Invalid(_)));
        assert!(matches!(parse_command("n"), FormCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        for line in ["n 12 junk", "x 0 1", "g junk", "u l"] {
            assert_eq!(
                parse_command(line),
                FormCommand::Invalid(format!("Unknown command '{}'", line))
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("generate"),
            FormCommand::Invalid("Unknown command 'generate'".to_string())
        );
        assert!(matches!(parse_command(""), FormCommand::Invalid(_)));
    }

    #[test]
    fn test_form_table_shows_password_and_length() {
        let mut config = Configuration::default();
        config.include_digits = true;
        let rendered = form_table(&config, "a1b2c3").to_string();
        assert!(rendered.contains("a1b2c3"));
        assert!(rendered.contains("20"));
        assert!(rendered.contains("Include Numbers"));
        assert!(rendered.contains("[x]"));
    }
}
