//! Configuration module for the forecast engine.

// Can all be private now because we have a public re-export.
mod debug;
mod periods;
mod persistence;
mod reference;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DEBUG_FLAGS;
pub use periods::{PERIOD_VIEWS, PeriodViewConfig};
pub use persistence::{PERSISTENCE, default_snapshot_path};
pub use reference::{
    BACKTEST_METRICS, BacktestMetric, BasisItem, ConfidenceScore, FALLBACK_DRIVERS,
    FALLBACK_REGIMES, MODEL_CONFIDENCE, PREDICTION_BASIS, PredictionBasis, RISK_PROFILES,
    RiskFactor, RiskProfile, RiskSeverity,
};
