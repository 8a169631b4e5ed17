mod commands;
mod helpers;

use clap::Parser;
use compton_core::domain::ComptonError;

const PROGRAM_NAME: &str = "compton-profiles";

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run_with_args(args) {
        Ok(code) => code,
        Err(error) => {
            let compatibility_error = error.as_compton_error();
            eprintln!("{}", compatibility_error.diagnostic_line());
            if let Some(summary_line) = compatibility_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            compatibility_error.exit_code()
        }
    }
}

fn run_with_args(args: Vec<String>) -> Result<i32, CliError> {
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "compton-profiles",
    version,
    about = "Per-shell Compton half profiles for elements 1-100"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Generate the half profiles of one element
    Generate(commands::GenerateArgs),
    /// List the Compton shells of one element
    Layout(commands::LayoutArgs),
    /// Tabulate the occupation number of one shell
    Occupation(commands::OccupationArgs),
    /// Check half-profile invariants over a range of elements
    Verify(commands::VerifyArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Generate(args) => commands::run_generate_command(args),
        CliCommand::Layout(args) => commands::run_layout_command(args),
        CliCommand::Occupation(args) => commands::run_occupation_command(args),
        CliCommand::Verify(args) => commands::run_verify_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(ComptonError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_compton_error(&self) -> ComptonError {
        match self {
            Self::Usage(message) => {
                ComptonError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => ComptonError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<ComptonError> for CliError {
    fn from(error: ComptonError) -> Self {
        Self::Compute(error)
    }
}
