#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::{PERSISTENCE, default_snapshot_path};
pub use data::load_snapshot;
pub use domain::{ChartWindow, DailyPoint, ForecastPeriod};
pub use engine::{DashboardView, ForecastEngine};
pub use models::{PeriodForecast, ScenarioOutcome, Snapshot};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prediction snapshot to read
    #[arg(long, default_value_t = default_snapshot_path())]
    pub snapshot: String,

    /// Horizon to decompose into scenarios (3d, 15d, 30d, 60d, 90d, 180d, 365d)
    #[arg(long, default_value_t = ForecastPeriod::D90)]
    pub period: ForecastPeriod,

    /// History shown in front of the forecast (1m, 3m, 1y, 5y, all)
    #[arg(long, default_value_t = ChartWindow::ThreeMonths)]
    pub window: ChartWindow,

    /// Seed for the placeholder chart shown when no forecast series is published
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the dashboard as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Loads the snapshot (if readable), computes the dashboard and prints it.
/// An unreadable snapshot is not fatal: the fallback dashboard is shown instead.
pub fn run(args: Cli) -> anyhow::Result<()> {
    let snapshot = match load_snapshot(&args.snapshot) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("{:#}. Showing fallback dashboard.", e);
            None
        }
    };

    let view = ForecastEngine::compute(snapshot.as_ref(), args.period, args.window, args.seed);

    if args.json {
        let text = serde_json::to_string_pretty(&view)?;
        println!("{}", text);
    } else {
        println!("{}", report::render_dashboard(&view));
    }
    Ok(())
}
