//! Static copy shown next to the numbers: risk factors, prediction basis,
//! backtest metrics and placeholder market views.
//! Pure data, indexed by `ForecastPeriod::index()` where keyed by horizon.

use serde::Serialize;
use strum_macros::Display;

use crate::domain::ForecastPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RiskSeverity {
    High,
    Medium,
    Supportive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactor {
    pub severity: RiskSeverity,
    pub title: &'static str,
    /// Estimated index impact in points.
    pub impact: i32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskProfile {
    pub period: ForecastPeriod,
    pub factors: [RiskFactor; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasisItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionBasis {
    pub period: ForecastPeriod,
    pub title: &'static str,
    pub items: [BasisItem; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacktestMetric {
    pub horizon: &'static str,
    pub mape: f64,
    pub rmse: f64,
    pub accuracy: f64,
    pub sharpe: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceScore {
    pub category: &'static str,
    /// Out of 5.0
    pub score: f64,
}

const fn risk(
    severity: RiskSeverity,
    title: &'static str,
    impact: i32,
    description: &'static str,
) -> RiskFactor {
    RiskFactor {
        severity,
        title,
        impact,
        description,
    }
}

const fn item(label: &'static str, value: &'static str) -> BasisItem {
    BasisItem { label, value }
}

use RiskSeverity::{High, Medium, Supportive};

pub static RISK_PROFILES: [RiskProfile; 7] = [
    RiskProfile {
        period: ForecastPeriod::D3,
        factors: [
            risk(High, "US payrolls volatility", -160, "Short-rate sensitivity can whipsaw the index"),
            risk(Medium, "Sharp KRW/USD moves", -110, "FX spikes unsettle foreign flows"),
            risk(Supportive, "Foreign futures net buying", 140, "Program buying adds near-term lift"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D15,
        factors: [
            risk(High, "Hawkish FOMC minutes", -210, "Renewed tightening bets stretch valuations"),
            risk(Medium, "Strength of China stimulus", -140, "Weaker stimulus weighs on cyclicals"),
            risk(Supportive, "Memory spot price rebound", 190, "Large-cap IT earnings priced in early"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D30,
        factors: [
            risk(High, "Rising US CPI", -280, "Re-accelerating inflation hardens the Fed"),
            risk(Medium, "China PMI below 50", -190, "Slowdown threatens export demand"),
            risk(Supportive, "Semiconductor price recovery", 230, "AI server memory demand keeps growing"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D60,
        factors: [
            risk(High, "US long yields climbing again", -320, "Higher discount rates pressure growth names"),
            risk(Medium, "Softer China export data", -220, "Weak external demand hits Korean exporters"),
            risk(Supportive, "Chip inventory normalisation", 290, "Upward earnings revisions support the floor"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D90,
        factors: [
            risk(High, "Earnings guidance cuts", -380, "Lower estimates force a de-rating"),
            risk(Medium, "Geopolitical risk flare-up", -260, "Commodity and logistics stress lift volatility"),
            risk(Supportive, "AI infrastructure capex", 330, "Earnings momentum led by large-cap IT"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D180,
        factors: [
            risk(High, "Deepening global slowdown", -430, "Manufacturing downturn delays export recovery"),
            risk(Medium, "Wider FX volatility", -300, "EM outflows may pull foreign money out"),
            risk(Supportive, "Policy and liquidity easing", 360, "Lower rates help valuations recover"),
        ],
    },
    RiskProfile {
        period: ForecastPeriod::D365,
        factors: [
            risk(High, "US recession risk", -520, "Global demand contraction cuts the earnings path"),
            risk(Medium, "Uncertain policy-rate path", -350, "Delayed easing keeps discount rates high"),
            risk(Supportive, "Semiconductor supercycle", 420, "Joint memory and foundry recovery lifts the ceiling"),
        ],
    },
];

pub static PREDICTION_BASIS: [PredictionBasis; 7] = [
    PredictionBasis {
        period: ForecastPeriod::D3,
        title: "3-day forecast basis",
        items: [
            item("Very short momentum", "Flows and volatility of the last 5 sessions"),
            item("Sentiment", "Higher news sensitivity widens short swings"),
            item("Regime link", "Current 'Normal' regime likely persists near term"),
            item("Risk check", "Watch volatility around US data releases"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D15,
        title: "15-day forecast basis",
        items: [
            item("Flows", "Whether foreign net buying continues is the key variable"),
            item("FX / rates", "KRW/USD and US Treasury yields move together"),
            item("Technicals", "Retest of short-term support, then a test of the highs"),
            item("Model signal", "Trend persistence from 3-week pattern similarity"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D30,
        title: "30-day forecast basis",
        items: [
            item("Key driver", "Co-movement with the S&P 500 rally (35%)"),
            item("Flows / FX", "Stable KRW and foreign buying (22%)"),
            item("Regime", "Currently in the 'Normal' regime (85%)"),
            item("Technicals", "Moving averages aligned, stepwise advance"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D60,
        title: "60-day forecast basis",
        items: [
            item("Macro", "Fed on hold priced in (18%)"),
            item("Liquidity", "Global liquidity supply expected to continue"),
            item("Volatility", "VIX holding below 20"),
            item("Accuracy", "Historical directional accuracy 58%"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D90,
        title: "90-day forecast basis",
        items: [
            item("Fundamentals", "Semiconductor upcycle fully reflected"),
            item("Growth", "Export recovery and earnings improvement"),
            item("Trend capture", "Long-range trend learned by the transformer"),
            item("Target", "Medium-term floor holds with upside breakout"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D180,
        title: "180-day forecast basis",
        items: [
            item("Earnings cycle", "Half-year cumulative effect of the chip/export cycle"),
            item("Policy", "Easing expectations and recovering liquidity"),
            item("Valuation", "Upward estimate revisions leave room to re-rate"),
            item("Outlook", "Gentle medium-term uptrend dominates"),
        ],
    },
    PredictionBasis {
        period: ForecastPeriod::D365,
        title: "365-day forecast basis",
        items: [
            item("Long trend", "Macro, earnings and liquidity recovery scenario"),
            item("Cycle", "Annual cumulative effect of an earnings turnaround"),
            item("Risks", "Geopolitics and policy may widen mid-course volatility"),
            item("Stance", "Long-run uptrend assumed with staged entries"),
        ],
    },
];

pub const BACKTEST_METRICS: &[BacktestMetric] = &[
    BacktestMetric { horizon: "1d", mape: 2.1, rmse: 88.0, accuracy: 61.0, sharpe: 1.8 },
    BacktestMetric { horizon: "5d", mape: 3.8, rmse: 165.0, accuracy: 58.0, sharpe: 1.5 },
    BacktestMetric { horizon: "30d", mape: 7.2, rmse: 330.0, accuracy: 54.0, sharpe: 1.2 },
    BacktestMetric { horizon: "90d", mape: 11.5, rmse: 650.0, accuracy: 51.0, sharpe: 0.9 },
];

pub const MODEL_CONFIDENCE: &[ConfidenceScore] = &[
    ConfidenceScore { category: "Data reliability", score: 4.5 },
    ConfidenceScore { category: "Model stability", score: 4.2 },
    ConfidenceScore { category: "Forecast accuracy", score: 4.0 },
    ConfidenceScore { category: "Market fit", score: 4.1 },
];

/// Driver importances (percent) shown until a snapshot supplies `key_drivers`.
pub const FALLBACK_DRIVERS: &[(&str, f64)] = &[
    ("S&P 500", 18.2),
    ("USD/KRW", 12.4),
    ("VIX Index", 10.1),
    ("DRAM Price", 8.7),
    ("Foreign Net", 7.3),
    ("Bond Yield", 6.8),
    ("PMI Data", 5.2),
    ("Others", 31.3),
];

/// Regime probabilities shown until a snapshot supplies `regime.probabilities`.
pub const FALLBACK_REGIMES: &[(&str, f64)] = &[
    ("Normal", 0.68),
    ("Rate Transition", 0.28),
    ("Earnings Season", 0.04),
    ("Crisis", 0.0),
];
