//! Binary crate for the `skycast` command-line tool.
//!
//! `skycast` prints the stored defaults' report; `skycast <location> <mode> <days>`
//! overrides them for one run.

use clap::Parser;
use std::process::ExitCode;

use skycast_cli::{exit, logging};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init_tracing();

    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit::report_error(&err),
    }
}
