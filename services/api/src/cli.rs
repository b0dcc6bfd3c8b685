use crate::report::{run_stats_report, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use junta_ai::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Junta AÍ",
    about = "Serve the Junta AÍ questionnaire API or inspect its anonymous statistics",
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
    /// Print the aggregate statistics report for a data file as JSON
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the JSON data file holding submissions and resources
    #[arg(long, conflicts_with = "in_memory")]
    pub(crate) data_file: Option<PathBuf>,
    /// Keep submissions in memory only; nothing is written to disk
    #[arg(long)]
    pub(crate) in_memory: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Stats(args) => run_stats_report(args),
    }
}
