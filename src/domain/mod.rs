// Domain types and value objects
mod chart_window;
mod daily_point;
mod forecast_period;

pub use chart_window::ChartWindow;
pub use daily_point::{ConfidenceBands, DailyPoint, forecast_label};
pub use forecast_period::ForecastPeriod;
