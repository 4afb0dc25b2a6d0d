//! Interactive editor for the defaults `skycast` uses when run without arguments.

use clap::Parser;
use std::process::ExitCode;

use skycast_cli::{exit, logging, prompter::InquirePrompter};
use skycast_core::{Config, SettingsEditor};

#[derive(Debug, Parser)]
#[command(name = "skycast-configure", version, about = "Edit the stored skycast defaults")]
struct Args {}

fn main() -> ExitCode {
    logging::init_tracing();
    let _ = Args::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit::report_error(&err),
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let prompter = InquirePrompter::new();

    let changed = SettingsEditor::new(config.settings_path()?, &prompter).run()?;

    if changed.is_empty() {
        println!("No settings changed.");
    } else {
        println!("Updated: {}", changed.join(", "));
    }
    Ok(())
}
