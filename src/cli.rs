use crate::config::Config;
use crate::error::AppError;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Daily NHL goal scoring due tracker
///
/// Lists last season's high-volume goal scorers who play today and whose
/// current scoring drought is longer than their usual days-per-goal.
///
/// Runs without any flags; the options below only override defaults.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Report date in YYYY-MM-DD format. Defaults to today's local date.
    #[arg(long = "date", short = 'd')]
    pub date: Option<String>,

    /// Minimum goals last season for a player to be tracked (default: 40).
    #[arg(long = "min-goals", short = 'g', value_name = "GOALS")]
    pub min_goals: Option<u32>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr. The report itself always goes to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), AppError> {
        if let Some(min_goals) = self.min_goals {
            config.min_goals = min_goals;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
        config.validate()
    }
}
