use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use log::debug;

use crate::actions::{Action, FormAction, GenerateAction, PrintHelpAction};
use crate::config::Configuration;

mod actions;
mod charset;
mod clipboard;
mod config;
mod error;
mod generator;
mod notify;
mod session;
mod ui;

fn cli() -> Command {
    Command::new("passforge")
        .about("A password generator. Run without arguments to open the interactive form.")
        .subcommand_required(false)
        .arg_required_else_help(false)
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("form")
                .about("Opens the interactive password form.")
        )
        .subcommand(
            Command::new("gen")
                .about("Generates a password from the selected character types and prints it.")
                .arg(arg!(-u --uppercase "Include uppercase letters").action(ArgAction::SetTrue))
                .arg(arg!(-l --lowercase "Include lowercase letters").action(ArgAction::SetTrue))
                .arg(arg!(-d --digits "Include numbers").action(ArgAction::SetTrue))
                .arg(arg!(-s --symbols "Include symbols").action(ArgAction::SetTrue))
                .arg(
                    arg!(-n --length <LENGTH> "Password length")
                        .value_parser(value_parser!(u8).range(
                            Configuration::MIN_LENGTH as i64..=Configuration::MAX_LENGTH as i64,
                        ))
                        .default_value("20"),
                )
                .arg(arg!(
                    -c --copy "Also copy the password to the clipboard."
                ).action(ArgAction::SetTrue))
        )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let matches = cli().get_matches();
    debug!("running {:?}", matches.subcommand_name());
    action_for(&matches).run()?;
    Ok(())
}

fn action_for(matches: &ArgMatches) -> Box<dyn Action> {
    match matches.subcommand() {
        Some(("gen", sub_matches)) => Box::new(GenerateAction::new(sub_matches)),
        Some(("form", _)) | None => Box::new(FormAction),
        _ => Box::new(PrintHelpAction::new(cli())),
    }
}
