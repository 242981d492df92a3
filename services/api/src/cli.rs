use crate::report::{run_percentage_report, PercentageArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use household_fpl::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Household FPL Service",
    about = "Store households and compute poverty level percentages and benefit eligibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the guideline and FPL ratio for an income and household size
    Percentage(PercentageArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Directory holding Others.csv, Alaska.csv, and Hawaii.csv
    #[arg(long)]
    pub(crate) guideline_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Percentage(args) => run_percentage_report(args),
    }
}
