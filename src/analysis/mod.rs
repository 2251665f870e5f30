// Numeric core: guard, series synthesis, interpolation, scenarios
pub mod numeric_guard;
pub mod series_synthesizer;
pub mod milestone_interpolator;
pub mod scenario_decomposer;

// Presentation-side lookups and placeholders
pub mod reference_tables;
pub mod market_view;
pub mod bootstrap;

pub use bootstrap::BootstrapGenerator;
pub use milestone_interpolator::MilestoneInterpolator;
pub use numeric_guard::{NumericInput, guard};
pub use series_synthesizer::synthesize;
