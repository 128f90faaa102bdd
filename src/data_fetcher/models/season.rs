use crate::error::AppError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Response of the `seasons/current` and `seasons/{id}` endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonsResponse {
    pub seasons: Vec<SeasonRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "seasonId")]
    pub season_id: String,
    #[serde(rename = "regularSeasonStartDate", default)]
    pub regular_season_start_date: Option<String>,
    #[serde(rename = "regularSeasonEndDate", default)]
    pub regular_season_end_date: Option<String>,
}

/// Season identifier in the stats API's encoding: start year followed by end year.
///
/// ```
/// use nhl_due::data_fetcher::models::SeasonId;
///
/// let season: SeasonId = "20242025".parse().unwrap();
/// assert_eq!(season.previous().to_string(), "20232024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonId {
    start_year: i32,
}

impl SeasonId {
    pub fn from_start_year(start_year: i32) -> Self {
        SeasonId { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// The season that ended when this one started.
    pub fn previous(&self) -> Self {
        SeasonId {
            start_year: self.start_year - 1,
        }
    }
}

impl std::str::FromStr for SeasonId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::invalid_season_id(s));
        }

        let start_year: i32 = s[..4]
            .parse()
            .map_err(|_| AppError::invalid_season_id(s))?;
        let end_year: i32 = s[4..]
            .parse()
            .map_err(|_| AppError::invalid_season_id(s))?;

        if end_year != start_year + 1 {
            return Err(AppError::invalid_season_id(s));
        }

        Ok(SeasonId { start_year })
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start_year, self.start_year + 1)
    }
}

/// Seasons resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub current: SeasonId,
    pub previous: SeasonId,
    pub regular_season_start: NaiveDate,
}
