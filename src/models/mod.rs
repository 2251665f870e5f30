mod forecast;
mod market_view;
mod milestone;
mod snapshot;

pub use forecast::{PeriodForecast, ScenarioKind, ScenarioOutcome};
pub use market_view::{Driver, FeatureImportance, MarketRisk, RegimeEntry, RegimeView};
pub use milestone::{FallbackMilestone, MilestoneAnchor, Milestones};
pub use snapshot::{
    ForecastInput, RawDriver, RawForecastPoint, RawHistoryPoint, RawMilestone,
    RawRegime, RawSnapshot, RegimeSnapshot, Snapshot, derive_daily_move,
};
