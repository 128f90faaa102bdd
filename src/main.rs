// src/main.rs
use clap::Parser;
use nhl_due::cli::Args;
use nhl_due::config::Config;
use nhl_due::data_fetcher::api::{determine_report_date, evaluate_due_players};
use nhl_due::error::AppError;
use nhl_due::logging::setup_logging;
use nhl_due::report::format_due_report;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await?;
    args.apply_to(&mut config)?;

    if args.list_config {
        config.display();
        return Ok(());
    }

    // The guard must outlive every log call of the run
    let (log_file_path, _guard) = setup_logging(&config, args.debug).await?;
    info!("Logs are being written to: {log_file_path}");

    let result = report_due_players(args, &config).await;
    if let Err(e) = &result {
        error!("Run aborted: {e}");
    }
    result
}

async fn report_due_players(args: &Args, config: &Config) -> Result<(), AppError> {
    let today = determine_report_date(args.date.as_deref())?;
    let report = evaluate_due_players(config, today).await?;
    println!("{}", format_due_report(&report));
    Ok(())
}
