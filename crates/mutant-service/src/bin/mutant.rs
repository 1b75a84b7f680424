use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use mutant_core::config::MutantConfig;
use mutant_core::errors::{MutantErrorCode, ServiceError};
use mutant_core::tracing::init_tracing;
use mutant_service::cli::{exit_code, Cli, Commands, EXIT_INTERNAL, EXIT_OK, EXIT_REJECTED};
use mutant_service::MutantService;
use serde::Serialize;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

fn run(cli: &Cli) -> Result<u8, ServiceError> {
    let config = MutantConfig::load(&cli.root, Some(&cli.overrides()))?;

    match &cli.command {
        Commands::Check { input } => {
            // Read the body before opening the database so a bad path does
            // not leave an empty store behind.
            let body = match read_input(input) {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("{}", e.coded_string());
                    return Ok(EXIT_REJECTED);
                }
            };
            let service = MutantService::from_config(&config, &cli.root)?;
            let outcome = service.check(&body);
            Ok(print_json(&outcome, exit_code(&outcome)))
        }
        Commands::Stats => {
            let service = MutantService::from_config(&config, &cli.root)?;
            Ok(print_json(&service.stats()?, EXIT_OK))
        }
        Commands::Purge => {
            let service = MutantService::from_config(&config, &cli.root)?;
            Ok(print_json(&service.purge()?, EXIT_OK))
        }
    }
}

/// Request body from a file, or from stdin when `input` is `-`.
fn read_input(input: &str) -> Result<String, ServiceError> {
    let read = if input == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body).map(|_| body)
    } else {
        std::fs::read_to_string(input)
    };
    read.map_err(|e| ServiceError::InvalidRequest {
        message: format!("read {input}: {e}"),
    })
}

/// Print `value` as JSON and pass `code` through, or report an internal error.
fn print_json<T: Serialize>(value: &T, code: u8) -> u8 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            code
        }
        Err(e) => {
            eprintln!("failed to serialize output: {e}");
            EXIT_INTERNAL
        }
    }
}
