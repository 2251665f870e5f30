use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::domain::ForecastPeriod;

/// Point forecast for one horizon. Rebuilt on every computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodForecast {
    pub period: ForecastPeriod,
    /// Index level, whole points.
    pub value: f64,
    /// Percent change vs the current price, one decimal.
    pub change_pct: f64,
    /// Uncertainty in index points.
    pub uncertainty_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    #[strum(to_string = "Base")]
    Base,
    #[strum(to_string = "Optimistic")]
    Optimistic,
    #[strum(to_string = "Pessimistic")]
    Pessimistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: ScenarioKind,
    /// Percent weight from the horizon's view config.
    pub probability: u8,
    pub value: f64,
    pub change_pct: f64,
}
