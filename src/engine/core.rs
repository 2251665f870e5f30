use crate::analysis::{
    BootstrapGenerator, MilestoneInterpolator,
    market_view::{feature_importances, regime_view},
    reference_tables::{market_risks, prediction_basis},
    scenario_decomposer::{decompose, scenario_range},
    synthesize,
};
use crate::config::{BACKTEST_METRICS, MODEL_CONFIDENCE};
use crate::domain::{ChartWindow, ForecastPeriod};
use crate::models::{Snapshot, derive_daily_move};
use crate::trace_time;
use crate::utils::format_timestamp;

use super::view::DashboardView;

/// Stateless facade over the numeric core.
///
/// Every call is a full recompute from the snapshot it is handed; nothing is
/// cached between calls, so it can be shared freely across threads.
pub struct ForecastEngine;

impl ForecastEngine {
    /// Builds the dashboard for `selected` / `window`.
    ///
    /// With no snapshot (or one without a history/forecast block) the chart
    /// uses the bootstrap series, seeded from `bootstrap_seed` when given.
    /// All numeric outputs other than the placeholder chart are deterministic.
    pub fn compute(
        snapshot: Option<&Snapshot>,
        selected: ForecastPeriod,
        window: ChartWindow,
        bootstrap_seed: Option<u64>,
    ) -> DashboardView {
        trace_time!("ForecastEngine::compute", 2_000, {
            let fallback;
            let (snapshot, awaiting_snapshot) = match snapshot {
                Some(s) => (s, false),
                None => {
                    log::debug!("No snapshot yet, computing from fallback constants");
                    fallback = Snapshot::fallback();
                    (&fallback, true)
                }
            };
            let current_price = snapshot.current_price;

            // 1. Chart series
            let placeholder_series = !snapshot.series_supplied;
            let full_series = if placeholder_series {
                BootstrapGenerator::new(bootstrap_seed).series(current_price)
            } else {
                synthesize(&snapshot.history, &snapshot.forecast, current_price)
            };

            // Until the first snapshot lands the headline move follows the placeholder chart
            let (daily_change, daily_pct) = if awaiting_snapshot {
                derive_daily_move(&full_series)
            } else {
                (snapshot.daily_change, snapshot.daily_pct)
            };

            // 2. Horizon forecasts
            let forecasts =
                MilestoneInterpolator::new(current_price, snapshot.milestones).forecast_all();
            let selected_forecast = forecasts[&selected];

            // 3. Scenarios for the selected horizon
            let view = selected.view();
            let scenarios = decompose(&selected_forecast, view, current_price);

            DashboardView {
                current_price,
                daily_change,
                daily_pct,
                last_update: snapshot.last_update.as_deref().map(format_timestamp),
                model_confidence: snapshot.model_confidence,
                selected,
                window,
                placeholder_series,
                series: window.slice(&full_series).to_vec(),
                forecasts,
                scenario_range: scenario_range(&selected_forecast, view),
                scenarios,
                risks: market_risks(selected),
                basis: *prediction_basis(selected),
                regime: regime_view(snapshot.regime.as_ref()),
                drivers: feature_importances(snapshot.drivers.as_deref()),
                backtest: BACKTEST_METRICS,
                confidence_scores: MODEL_CONFIDENCE,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{HORIZON, REFERENCE_PRICE, bootstrap};
    use crate::domain::DailyPoint;
    use crate::models::{ForecastInput, ScenarioKind};

    #[test]
    fn fallback_dashboard_numbers() {
        let view = ForecastEngine::compute(None, ForecastPeriod::D90, ChartWindow::All, Some(42));
        assert_eq!(view.current_price, REFERENCE_PRICE);
        assert!(view.placeholder_series);
        assert_eq!(view.series.len(), bootstrap::HISTORY_DAYS + HORIZON);

        assert_eq!(view.forecasts[&ForecastPeriod::D90].value, 6583.0);
        assert_eq!(view.forecasts[&ForecastPeriod::D180].change_pct, 13.2);
        assert_eq!(view.scenario_range, 265.0);

        let [base, optimistic, pessimistic] = view.scenarios;
        assert_eq!(base.name, ScenarioKind::Base);
        assert_eq!((optimistic.value, pessimistic.value), (6848.0, 6358.0));
        assert_eq!(view.selected_forecast().map(|f| f.value), Some(6583.0));
        assert_eq!(view.regime.current, "Normal");
        assert!(view.risks[0].description.starts_with("Long-term (90d)"));
    }

    #[test]
    fn seeded_placeholder_is_reproducible() {
        let a = ForecastEngine::compute(None, ForecastPeriod::D30, ChartWindow::All, Some(9));
        let b = ForecastEngine::compute(None, ForecastPeriod::D30, ChartWindow::All, Some(9));
        assert_eq!(a, b);
        assert_eq!(
            (a.daily_change, a.daily_pct),
            derive_daily_move(&a.series[..bootstrap::HISTORY_DAYS])
        );
    }

    #[test]
    fn supplied_series_is_synthesized_and_windowed() {
        let history: Vec<DailyPoint> = (0..300)
            .map(|i| DailyPoint::historical(format!("d{}", i), Some(6000.0 + i as f64)))
            .collect();
        let snapshot = Snapshot {
            history,
            forecast: vec![ForecastInput { forecast: Some(6310.0), ..Default::default() }],
            series_supplied: true,
            daily_change: 1.0,
            daily_pct: 0.02,
            ..Snapshot::fallback()
        };

        let view = ForecastEngine::compute(Some(&snapshot), ForecastPeriod::D15, ChartWindow::OneMonth, None);
        assert!(!view.placeholder_series);
        assert_eq!(view.series.len(), 22 + HORIZON);
        assert_eq!(view.series[0].label, "d278");
        assert_eq!(view.series[22].forecast, Some(6310.0));
        assert_eq!((view.daily_change, view.daily_pct), (1.0, 0.02));

        let all = ForecastEngine::compute(Some(&snapshot), ForecastPeriod::D15, ChartWindow::All, None);
        assert_eq!(all.series.len(), 300 + HORIZON);
    }

    #[test]
    fn placeholder_follows_snapshot_price() {
        let snapshot = Snapshot {
            current_price: 5600.0,
            ..Snapshot::fallback()
        };
        let view = ForecastEngine::compute(Some(&snapshot), ForecastPeriod::D30, ChartWindow::All, Some(4));
        assert!(view.placeholder_series);
        let first = view.series[bootstrap::HISTORY_DAYS].forecast.unwrap();
        let center = 5600.0 + 2.2 + (1.0f64 / 15.0).sin() * 30.0;
        assert!((first - center).abs() <= 11.0);
        // the walk is clamped into its band regardless of the start price
        assert!(view.series[..bootstrap::HISTORY_DAYS].iter().all(|p| p.actual.unwrap() >= 5800.0));
    }

    #[test]
    fn same_snapshot_gives_same_view() {
        let snapshot = Snapshot {
            series_supplied: true,
            ..Snapshot::fallback()
        };
        let a = ForecastEngine::compute(Some(&snapshot), ForecastPeriod::D365, ChartWindow::OneYear, None);
        let b = ForecastEngine::compute(Some(&snapshot), ForecastPeriod::D365, ChartWindow::OneYear, None);
        assert_eq!(a, b);
        assert_eq!(a.series.len(), HORIZON);
    }
}
