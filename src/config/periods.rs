//! Per-horizon view scaling and scenario weights.

use serde::Serialize;

use crate::domain::ForecastPeriod;

/// Static presentation parameters for one forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodViewConfig {
    pub period: ForecastPeriod,
    /// Weight the risk panel gives this horizon (display only).
    pub risk_scale: f64,
    /// Multiplier turning point uncertainty into the scenario spread.
    pub uncertainty_scale: f64,
    /// Base / optimistic / pessimistic weights in percent. Always sums to 100.
    pub probabilities: [u8; 3],
    /// Short horizon class shown next to risk and basis entries.
    pub tag: &'static str,
}

/// Indexed by `ForecastPeriod::index()`.
pub static PERIOD_VIEWS: [PeriodViewConfig; 7] = [
    PeriodViewConfig {
        period: ForecastPeriod::D3,
        risk_scale: 0.55,
        uncertainty_scale: 0.6,
        probabilities: [78, 15, 7],
        tag: "Ultra-short",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D15,
        risk_scale: 0.7,
        uncertainty_scale: 0.75,
        probabilities: [74, 18, 8],
        tag: "Ultra-short",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D30,
        risk_scale: 0.8,
        uncertainty_scale: 0.85,
        probabilities: [70, 20, 10],
        tag: "Short-term",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D60,
        risk_scale: 1.0,
        uncertainty_scale: 1.0,
        probabilities: [62, 23, 15],
        tag: "Medium-term",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D90,
        risk_scale: 1.2,
        uncertainty_scale: 1.15,
        probabilities: [55, 30, 15],
        tag: "Long-term",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D180,
        risk_scale: 1.45,
        uncertainty_scale: 1.35,
        probabilities: [48, 34, 18],
        tag: "Extended",
    },
    PeriodViewConfig {
        period: ForecastPeriod::D365,
        risk_scale: 1.7,
        uncertainty_scale: 1.6,
        probabilities: [42, 36, 22],
        tag: "Annual",
    },
];
