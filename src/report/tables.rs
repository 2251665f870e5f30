//! Plain-text rendering of a `DashboardView` for the terminal.

use std::fmt::Write;

use tabled::{Table, Tabled, settings::Style};

use crate::{
    config::{BacktestMetric, ConfidenceScore},
    engine::DashboardView,
    models::{FeatureImportance, MarketRisk, PeriodForecast, RegimeEntry, ScenarioOutcome},
};

fn signed(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Horizon")]
    horizon: String,
    #[tabled(rename = "Forecast (pt)")]
    value: String,
    #[tabled(rename = "Change %")]
    change: String,
    #[tabled(rename = "± (pt)")]
    uncertainty: String,
}

impl ForecastRow {
    fn new(f: &PeriodForecast, selected: bool) -> Self {
        let marker = if selected { " *" } else { "" };
        Self {
            horizon: format!("{}{}", f.period, marker),
            value: format!("{:.0}", f.value),
            change: signed(f.change_pct, 1),
            uncertainty: format!("{:.0}", f.uncertainty_pt),
        }
    }
}

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    name: String,
    #[tabled(rename = "Probability")]
    probability: String,
    #[tabled(rename = "Forecast (pt)")]
    value: String,
    #[tabled(rename = "Change %")]
    change: String,
}

impl From<&ScenarioOutcome> for ScenarioRow {
    fn from(s: &ScenarioOutcome) -> Self {
        Self {
            name: s.name.to_string(),
            probability: format!("{}%", s.probability),
            value: format!("{:.0}", s.value),
            change: signed(s.change_pct, 1),
        }
    }
}

#[derive(Tabled)]
struct RiskRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Risk")]
    title: String,
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Notes")]
    description: String,
}

impl From<&MarketRisk> for RiskRow {
    fn from(r: &MarketRisk) -> Self {
        Self {
            severity: r.severity.to_string(),
            title: r.title.clone(),
            impact: r.impact_text.clone(),
            description: r.description.clone(),
        }
    }
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl From<&RegimeEntry> for ShareRow {
    fn from(e: &RegimeEntry) -> Self {
        Self {
            name: e.name.clone(),
            share: format!("{:.0}%", e.probability * 100.0),
        }
    }
}

impl From<&FeatureImportance> for ShareRow {
    fn from(f: &FeatureImportance) -> Self {
        Self {
            name: f.feature.clone(),
            share: format!("{:.1}%", f.importance),
        }
    }
}

#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "Basis")]
    label: &'static str,
    #[tabled(rename = "")]
    value: &'static str,
}

#[derive(Tabled)]
struct BacktestRow {
    #[tabled(rename = "Horizon")]
    horizon: &'static str,
    #[tabled(rename = "MAPE %")]
    mape: String,
    #[tabled(rename = "RMSE")]
    rmse: String,
    #[tabled(rename = "Direction %")]
    accuracy: String,
    #[tabled(rename = "Sharpe")]
    sharpe: String,
}

impl From<&BacktestMetric> for BacktestRow {
    fn from(m: &BacktestMetric) -> Self {
        Self {
            horizon: m.horizon,
            mape: format!("{:.1}", m.mape),
            rmse: format!("{:.0}", m.rmse),
            accuracy: format!("{:.0}", m.accuracy),
            sharpe: format!("{:.1}", m.sharpe),
        }
    }
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Score")]
    score: String,
}

impl From<&ConfidenceScore> for ScoreRow {
    fn from(c: &ConfidenceScore) -> Self {
        Self {
            category: c.category,
            score: format!("{:.1} / 5", c.score),
        }
    }
}

fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Full terminal report. Sections are separated by a blank line.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "KOSPI {:.2} ({} / {}%)",
        view.current_price,
        signed(view.daily_change, 2),
        signed(view.daily_pct, 2)
    );
    if let Some(stamp) = &view.last_update {
        let _ = writeln!(out, "Last update: {}", stamp);
    }
    if view.placeholder_series {
        let _ = writeln!(out, "Chart: placeholder series (no published forecast yet)");
    }
    let forecast_rows = view.series.iter().filter(|p| p.is_forecast()).count();
    let _ = writeln!(
        out,
        "Chart window {}: {} rows ({} history, {} forecast)",
        view.window,
        view.series.len(),
        view.series.len() - forecast_rows,
        forecast_rows
    );
    out.push('\n');

    let _ = writeln!(out, "{}", table(view.forecasts.values().map(|f| ForecastRow::new(f, f.period == view.selected))));
    let _ = writeln!(out, "\nScenarios {} (range {:.0}pt)", view.selected, view.scenario_range);
    let _ = writeln!(out, "{}", table(view.scenarios.iter().map(ScenarioRow::from)));

    let _ = writeln!(out, "\n{}", view.basis.title);
    let _ = writeln!(
        out,
        "{}",
        table(view.basis.items.iter().map(|i| LabelRow { label: i.label, value: i.value }))
    );

    let _ = writeln!(out, "\nRisks");
    let _ = writeln!(out, "{}", table(view.risks.iter().map(RiskRow::from)));

    let _ = writeln!(
        out,
        "\nRegime: {} ({:.0}%)",
        view.regime.current,
        view.regime.current_probability * 100.0
    );
    let _ = writeln!(out, "{}", table(view.regime.entries.iter().map(ShareRow::from)));

    let _ = writeln!(out, "\nKey drivers");
    let _ = writeln!(out, "{}", table(view.drivers.iter().map(ShareRow::from)));

    let _ = writeln!(out, "\nBacktest");
    let _ = writeln!(out, "{}", table(view.backtest.iter().map(BacktestRow::from)));

    let _ = writeln!(out, "\nModel confidence {:.0}%", view.model_confidence * 100.0);
    let _ = write!(out, "{}", table(view.confidence_scores.iter().map(ScoreRow::from)));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChartWindow, ForecastPeriod},
        engine::ForecastEngine,
    };

    #[test]
    fn signed_numbers() {
        assert_eq!(signed(8.2, 1), "+8.2");
        assert_eq!(signed(-0.45, 2), "-0.45");
        assert_eq!(signed(0.0, 1), "0.0");
    }

    #[test]
    fn report_contains_headline_figures() {
        let view = ForecastEngine::compute(None, ForecastPeriod::D90, ChartWindow::ThreeMonths, Some(3));
        let text = render_dashboard(&view);
        assert!(text.starts_with("KOSPI 6083.86"));
        assert!(text.contains("90d *"));
        assert!(text.contains("6583"));
        assert!(text.contains("6848"));
        assert!(text.contains("6358"));
        assert!(text.contains("+12.6"));
        assert!(text.contains("Regime: Normal (68%)"));
        assert!(text.contains("placeholder series"));
    }

    #[test]
    fn report_lists_backtest_and_confidence() {
        let mut view = ForecastEngine::compute(None, ForecastPeriod::D30, ChartWindow::OneMonth, Some(3));
        view.model_confidence = 0.82;
        let text = render_dashboard(&view);
        assert!(text.contains("Backtest"));
        assert!(text.contains("MAPE %"));
        assert!(text.contains("11.5"));
        assert!(text.contains("Model confidence 82%"));
        assert!(text.contains("Data reliability"));
        assert!(text.contains("4.5 / 5"));
    }
}
