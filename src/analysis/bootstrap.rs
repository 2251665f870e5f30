//! Placeholder chart shown before any real snapshot has arrived.
//!
//! Randomized on purpose and kept away from the deterministic synthesis path.
//! Seed it when reproducible output is needed (tests, `--seed`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{
    config::constants::{HORIZON, bootstrap},
    domain::{ConfidenceBands, DailyPoint},
    utils::round_half_up,
};

pub struct BootstrapGenerator {
    rng: Pcg64,
}

impl BootstrapGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }

    /// Bounded random walk ending today. Labels count back in days ("-30" .. "-1").
    pub fn history(&mut self, start_price: f64) -> Vec<DailyPoint> {
        let mut price = start_price;
        (1..=bootstrap::HISTORY_DAYS)
            .rev()
            .map(|days_ago| {
                let step = (self.rng.r#gen::<f64>() - bootstrap::WALK_BIAS) * bootstrap::WALK_STEP;
                price = (price + step).clamp(bootstrap::WALK_FLOOR, bootstrap::WALK_CAP);
                DailyPoint::historical(format!("-{}", days_ago), Some(round_half_up(price)))
            })
            .collect()
    }

    /// Gentle uptrend with a slow wave and per-day noise, banded like a real forecast.
    pub fn forecast(&mut self, start_price: f64) -> Vec<DailyPoint> {
        (1..=HORIZON)
            .map(|day| {
                let d = day as f64;
                let trend = d * bootstrap::TREND_PER_DAY;
                let wave = (d / bootstrap::WAVE_PERIOD_DAYS).sin() * bootstrap::WAVE_AMPLITUDE;
                let noise = (self.rng.r#gen::<f64>() - 0.5) * bootstrap::NOISE;
                let value = round_half_up(start_price + trend + wave + noise);
                DailyPoint::projected(day, value, ConfidenceBands::around(value, day))
            })
            .collect()
    }

    /// History followed by the placeholder forecast.
    pub fn series(&mut self, start_price: f64) -> Vec<DailyPoint> {
        let mut series = self.history(start_price);
        series.extend(self.forecast(start_price));
        series
    }
}
