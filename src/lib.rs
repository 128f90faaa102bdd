//! Daily NHL goal scoring due tracker
//!
//! Finds last season's high-volume goal scorers, checks who plays today, and
//! flags the ones whose current scoring drought is longer than their usual
//! days-per-goal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_due::config::Config;
//! use nhl_due::data_fetcher::api::{determine_report_date, evaluate_due_players};
//! use nhl_due::report::format_due_report;
//! use nhl_due::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let today = determine_report_date(None)?;
//!
//!     let report = evaluate_due_players(&config, today).await?;
//!     println!("{}", format_due_report(&report));
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{DueReport, evaluate_due_players};
pub use data_fetcher::processors::DueAssessment;
pub use error::AppError;
pub use report::format_due_report;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
