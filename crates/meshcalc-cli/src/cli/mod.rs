mod commands;
mod helpers;
mod interactive;

use clap::Parser;
use meshcalc_core::domain::MeshError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let mesh_error = error.as_mesh_error();
            eprintln!("{}", mesh_error.diagnostic_line());
            if let Some(summary_line) = mesh_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            mesh_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("meshcalc".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli),
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
    name = "meshcalc",
    version,
    about = "Welded mesh screen weight and price calculator"
)]
struct Cli {
    /// Configuration file (default: nearest meshcalc.json, else built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Validate the inputs and print wire weight, screen weight, area, totals and prices
    Calculate(commands::CalculateArgs),
    /// Calculate and print the share message and link
    Share(commands::ShareArgs),
    /// Calculate, write the report document and print its share link
    Export(commands::ExportArgs),
    /// Fill the form interactively from standard input
    Session(commands::SessionArgs),
    /// List the catalog product types
    Products,
    /// Print the fixed calculation constants
    Constants {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the build stamp
    Version,
}

fn dispatch_parsed(cli: Cli) -> Result<i32, CliError> {
    let config = helpers::load_config(cli.config.as_deref())?;
    match cli.command {
        CliCommand::Calculate(args) => commands::run_calculate_command(args, &config),
        CliCommand::Share(args) => commands::run_share_command(args, &config),
        CliCommand::Export(args) => commands::run_export_command(args, &config),
        CliCommand::Session(args) => commands::run_session_command(args, &config),
        CliCommand::Products => commands::run_products_command(),
        CliCommand::Constants { json } => commands::run_constants_command(json),
        CliCommand::Version => commands::run_version_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(#[from] MeshError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_mesh_error(&self) -> MeshError {
        match self {
            Self::Usage(message) => MeshError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => MeshError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run};
    use meshcalc_core::domain::MeshError;

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let error = run(["frobnicate"]).expect_err("unknown subcommand should fail");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.as_mesh_error().placeholder(), "INPUT.CLI_USAGE");
        assert_eq!(error.as_mesh_error().exit_code(), 2);
    }

    #[test]
    fn help_exits_successfully() {
        assert_eq!(run(["--help"]).expect("help should succeed"), 0);
    }

    #[test]
    fn compute_errors_keep_their_category() {
        let error = CliError::from(MeshError::computation("RUN.TEST", "boom"));
        assert_eq!(error.as_mesh_error().exit_code(), 4);
    }

    #[test]
    fn internal_errors_map_to_io_category() {
        let error = CliError::from(anyhow::anyhow!("disk gone"));
        let mesh_error = error.as_mesh_error();
        assert_eq!(mesh_error.placeholder(), "IO.CLI");
        assert_eq!(mesh_error.exit_code(), 3);
    }
}
