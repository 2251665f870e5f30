use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::{PERIOD_VIEWS, PeriodViewConfig};

/// The seven horizons the dashboard publishes a point forecast for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum ForecastPeriod {
    #[strum(to_string = "3d", serialize = "3")]
    #[serde(rename = "3d")]
    D3,
    #[strum(to_string = "15d", serialize = "15")]
    #[serde(rename = "15d")]
    D15,
    #[strum(to_string = "30d", serialize = "30")]
    #[serde(rename = "30d")]
    D30,
    #[strum(to_string = "60d", serialize = "60")]
    #[serde(rename = "60d")]
    D60,
    #[default]
    #[strum(to_string = "90d", serialize = "90")]
    #[serde(rename = "90d")]
    D90,
    #[strum(to_string = "180d", serialize = "180")]
    #[serde(rename = "180d")]
    D180,
    #[strum(to_string = "365d", serialize = "365")]
    #[serde(rename = "365d")]
    D365,
}

impl ForecastPeriod {
    pub const ALL: [ForecastPeriod; 7] = [
        Self::D3,
        Self::D15,
        Self::D30,
        Self::D60,
        Self::D90,
        Self::D180,
        Self::D365,
    ];

    pub const fn days(self) -> u32 {
        match self {
            Self::D3 => 3,
            Self::D15 => 15,
            Self::D30 => 30,
            Self::D60 => 60,
            Self::D90 => 90,
            Self::D180 => 180,
            Self::D365 => 365,
        }
    }

    /// Position in `ALL`; the static tables are laid out in this order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn view(self) -> &'static PeriodViewConfig {
        &PERIOD_VIEWS[self.index()]
    }
}
