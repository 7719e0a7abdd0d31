//! Command line tool for epbridge

use std::{path::Path, process::ExitCode};

use anstream::{ColorChoice, eprintln};
use clap::Parser as _;
use epbridge_parser::{lower, parse_model, parse_objects};
use epbridge_shared::error::{AsBridgeError, BridgeError};
use epbridge_translator::{TranslatorOptions, translate_model};
use tracing_subscriber::EnvFilter;

use crate::command::{CliCommand, Commands, DevCommands};

mod command;
mod file;
mod print_diagnostics;
mod print_error;
mod print_model;
mod print_records;
mod stylesheet;

/// Environment variable holding the log filter, such as `debug` or
/// `epbridge_translator=trace`.
const LOG_ENV: &str = "EPBRIDGE_LOG";

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    init_logging();

    match cli.command {
        Commands::Translate {
            file,
            exclude_space_translation,
            display_partial,
            print_debug,
            no_colors,
        } => {
            set_colors(no_colors);
            let options = TranslatorOptions::new()
                .with_exclude_space_translation(exclude_space_translation);
            translate(&file, options, display_partial, print_debug)
        }
        Commands::Dev { command } => match command {
            DevCommands::PrintModel {
                file,
                display_partial,
                print_debug,
                no_colors,
            } => {
                set_colors(no_colors);
                print_model(&file, display_partial, print_debug)
            }
        },
    }
}

/// Logs go to stderr and are off unless `EPBRIDGE_LOG` asks for them,
/// since diagnostics are already printed as reports.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn set_colors(no_colors: bool) {
    if no_colors {
        ColorChoice::Never.write_global();
    }
}

fn translate(
    path: &Path,
    options: TranslatorOptions,
    display_partial: bool,
    print_debug: bool,
) -> ExitCode {
    let source = match file::read(path) {
        Ok(source) => source,
        Err(error) => {
            print_error::print(&error, print_debug);
            return ExitCode::FAILURE;
        }
    };

    let model = match parse_model(&source, None) {
        Ok(model) => model,
        Err(errors) => {
            print_errors(path, &source, &errors, print_debug);
            return ExitCode::FAILURE;
        }
    };

    match translate_model(&model, options) {
        Ok(translation) => {
            print_records::print(&translation.records, print_debug);
            print_diagnostics::print_all(&translation.diagnostics, &model, path, &source);
            if let Some(summary) = print_diagnostics::summary(&translation.diagnostics) {
                eprintln!("{} records written, {summary}", translation.records.len());
            }
            ExitCode::SUCCESS
        }
        Err(aborted) => {
            if display_partial {
                print_diagnostics::print_all(&aborted.diagnostics, &model, path, &source);
            }
            let error = BridgeError::from_error(&aborted, Some(path.to_path_buf()));
            print_error::print(&error, print_debug);
            ExitCode::FAILURE
        }
    }
}

fn print_model(path: &Path, display_partial: bool, print_debug: bool) -> ExitCode {
    let source = match file::read(path) {
        Ok(source) => source,
        Err(error) => {
            print_error::print(&error, print_debug);
            return ExitCode::FAILURE;
        }
    };

    let (objects, parsed_cleanly) = match parse_objects(&source, None) {
        Ok(objects) => (objects, true),
        Err(error_with_partial) => {
            print_errors(path, &source, &error_with_partial.errors, print_debug);
            if !display_partial {
                return ExitCode::FAILURE;
            }
            (error_with_partial.partial_result, false)
        }
    };

    match lower(&objects) {
        Ok(model) => {
            print_model::print(&model, print_debug);
            if parsed_cleanly {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(errors) => {
            print_errors(path, &source, &errors, print_debug);
            ExitCode::FAILURE
        }
    }
}

fn print_errors(path: &Path, source: &str, errors: &[impl AsBridgeError], print_debug: bool) {
    for error in errors {
        let error = BridgeError::from_error_with_source(error, path.to_path_buf(), source);
        print_error::print(&error, print_debug);
    }
}
