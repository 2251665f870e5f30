mod core;
mod view;

pub use core::ForecastEngine;
pub use view::DashboardView;
