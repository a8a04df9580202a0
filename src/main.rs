//! navtree CLI - load, validate and convert documentation sidebar trees
//!
//! Usage: navtree <COMMAND>
//!
//! Commands:
//!   check    Validate a sidebar document
//!   get      Print one sidebar, or one group inside it
//!   show     Print every sidebar as a tree
//!   ids      List document ids in display order
//!   convert  Re-emit a sidebar document in another format

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use navtree::config::Config;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::context::UiContext;
use ui::output::{print_config_warnings, print_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command_name = cli.command.name();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let (config, warnings) = match Config::discover(cli.config.as_deref(), &cwd) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, &Config::default());
            let err = anyhow::Error::new(err).context("failed to load configuration");
            print_error(&ui, command_name, &err);
            return ExitCode::FAILURE;
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, &config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = print_config_warnings(&ui, &mut out, &warnings)
        .map_err(anyhow::Error::from)
        .and_then(|()| commands::dispatch(&ui, &config, &mut out, cli.command));

    let _ = out.flush();
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            print_error(&ui, command_name, &err);
            ExitCode::FAILURE
        }
    }
}
