use crate::report::{run_evaluate, run_thresholds, EvaluateArgs, ThresholdsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sliding_fee::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sliding Fee Calculator",
    about = "Estimate sliding fee discounts from household size and income sources",
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
    /// Evaluate a household from an income spreadsheet
    Evaluate(EvaluateArgs),
    /// Print the FPL income ceilings for a family size
    Thresholds(ThresholdsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Thresholds(args) => run_thresholds(args),
    }
}
