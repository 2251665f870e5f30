use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::constants::HORIZON;
use crate::domain::DailyPoint;

const TRADING_DAYS_PER_MONTH: usize = 22;
const TRADING_DAYS_PER_YEAR: usize = 252;

/// How much history the chart shows in front of the forecast segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString, Default,
)]
#[strum(ascii_case_insensitive)]
pub enum ChartWindow {
    #[strum(to_string = "1m")]
    #[serde(rename = "1m")]
    OneMonth,
    #[default]
    #[strum(to_string = "3m")]
    #[serde(rename = "3m")]
    ThreeMonths,
    #[strum(to_string = "1y")]
    #[serde(rename = "1y")]
    OneYear,
    #[strum(to_string = "5y")]
    #[serde(rename = "5y")]
    FiveYears,
    #[strum(to_string = "all")]
    #[serde(rename = "all")]
    All,
}

impl ChartWindow {
    /// Trading days of history kept, `None` for everything.
    pub const fn history_days(self) -> Option<usize> {
        match self {
            Self::OneMonth => Some(TRADING_DAYS_PER_MONTH),
            Self::ThreeMonths => Some(TRADING_DAYS_PER_MONTH * 3),
            Self::OneYear => Some(TRADING_DAYS_PER_YEAR),
            Self::FiveYears => Some(TRADING_DAYS_PER_YEAR * 5),
            Self::All => None,
        }
    }

    /// Tail of a synthesized series: the last `history_days + HORIZON` points.
    pub fn slice(self, series: &[DailyPoint]) -> &[DailyPoint] {
        match self.history_days() {
            Some(history) => {
                let keep = history + HORIZON;
                &series[series.len().saturating_sub(keep)..]
            }
            None => series,
        }
    }
}
