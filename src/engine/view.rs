use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    config::{BacktestMetric, ConfidenceScore, PredictionBasis},
    domain::{ChartWindow, DailyPoint, ForecastPeriod},
    models::{FeatureImportance, MarketRisk, PeriodForecast, RegimeView, ScenarioOutcome},
};

/// Everything the dashboard shows for one snapshot and one selected horizon.
/// Built fresh by `ForecastEngine::compute`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub current_price: f64,
    pub daily_change: f64,
    pub daily_pct: f64,
    /// Display form of the upstream stamp, if any.
    pub last_update: Option<String>,
    pub model_confidence: f64,

    pub selected: ForecastPeriod,
    pub window: ChartWindow,
    /// True while the chart shows the placeholder series.
    pub placeholder_series: bool,
    /// Windowed chart rows.
    pub series: Vec<DailyPoint>,

    pub forecasts: BTreeMap<ForecastPeriod, PeriodForecast>,
    pub scenario_range: f64,
    pub scenarios: [ScenarioOutcome; 3],

    pub risks: [MarketRisk; 3],
    pub basis: PredictionBasis,
    pub regime: RegimeView,
    pub drivers: Vec<FeatureImportance>,
    pub backtest: &'static [BacktestMetric],
    pub confidence_scores: &'static [ConfidenceScore],
}

impl DashboardView {
    pub fn selected_forecast(&self) -> Option<&PeriodForecast> {
        self.forecasts.get(&self.selected)
    }
}
