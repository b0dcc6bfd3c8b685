use chrono::Local;
use clap::Args;
use junta_ai::config::AppConfig;
use junta_ai::error::AppError;
use junta_ai::statistics::{build_report, ReportingPeriod};
use junta_ai::store::JsonFileStore;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// JSON data file to read (defaults to APP_DATA_FILE)
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
    /// Reporting window: semana, mes, ano or total
    #[arg(long, default_value = "total")]
    pub(crate) periodo: ReportingPeriod,
}

pub(crate) fn run_stats_report(args: StatsArgs) -> Result<(), AppError> {
    let StatsArgs { data_file, periodo } = args;

    let data_file = match data_file {
        Some(path) => path,
        None => AppConfig::load()?.storage.data_file,
    };

    let store = JsonFileStore::open(&data_file)?;
    let report = build_report(&store, periodo, Local::now().naive_local())?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
