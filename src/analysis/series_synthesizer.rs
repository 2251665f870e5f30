//! Builds the unified daily chart series: untouched history followed by exactly
//! `HORIZON` forecast rows with confidence bands.
//!
//! Supplied forecast entries are normalized and truncated to the horizon; any
//! shortfall is extrapolated with a damped-momentum drift plus a fixed-period
//! seasonal wave. The whole pipeline is deterministic.

use crate::{
    analysis::numeric_guard::guard,
    config::{
        DEBUG_FLAGS,
        constants::{HORIZON, extrapolation},
    },
    domain::{ConfidenceBands, DailyPoint, forecast_label},
    models::ForecastInput,
    utils::round_half_up,
};

/// History + `HORIZON` forecast rows. Output length is always `history.len() + HORIZON`.
pub fn synthesize(
    history: &[DailyPoint],
    raw_forecast: &[ForecastInput],
    fallback_price: f64,
) -> Vec<DailyPoint> {
    let mut forecast: Vec<DailyPoint> = raw_forecast
        .iter()
        .take(HORIZON)
        .enumerate()
        .map(|(idx, entry)| normalize(idx + 1, entry, fallback_price))
        .collect();

    let shortfall = HORIZON - forecast.len();
    if shortfall > 0 {
        if DEBUG_FLAGS.log_extrapolation {
            log::debug!(
                "Forecast covers {} of {} days, extrapolating {}",
                forecast.len(),
                HORIZON,
                shortfall
            );
        }
        let seed = ExtrapolationSeed::from_tail(&forecast, history, fallback_price);
        extrapolate(&mut forecast, seed);
    }

    // Final labelling pass so the steps above never track labels themselves
    for (idx, point) in forecast.iter_mut().enumerate() {
        point.label = forecast_label(idx + 1);
    }

    let mut series = Vec::with_capacity(history.len() + HORIZON);
    series.extend_from_slice(history);
    series.extend(forecast);
    series
}

/// One supplied entry at day `day`. Missing bands are rebuilt around the
/// rounded forecast; supplied bands are passed through as given.
fn normalize(day: usize, entry: &ForecastInput, fallback_price: f64) -> DailyPoint {
    let value = round_half_up(guard(&entry.forecast, guard(&entry.actual, fallback_price)));
    let default = ConfidenceBands::around(value, day);

    DailyPoint::projected(
        day,
        value,
        ConfidenceBands {
            lower68: guard(&entry.lower68, default.lower68),
            upper68: guard(&entry.upper68, default.upper68),
            lower95: guard(&entry.lower95, default.lower95),
            upper95: guard(&entry.upper95, default.upper95),
        },
    )
}

/// Starting state for the extrapolation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ExtrapolationSeed {
    last_forecast: f64,
    last_step: f64,
}

impl ExtrapolationSeed {
    fn from_tail(forecast: &[DailyPoint], history: &[DailyPoint], fallback_price: f64) -> Self {
        let history_tail = guard(&history.last().and_then(|p| p.actual), fallback_price);
        let last_forecast = guard(&forecast.last().and_then(|p| p.forecast), history_tail);

        let last_step = match forecast {
            [.., prev, last] => {
                let last = guard(&last.forecast, last_forecast);
                let prev = guard(&prev.forecast, last_forecast - extrapolation::DEFAULT_STEP);
                last - prev
            }
            _ => extrapolation::DEFAULT_STEP,
        };

        Self {
            last_forecast,
            last_step,
        }
    }
}

/// Seasonal adjustment for day `day`.
#[inline]
fn seasonal(day: usize) -> f64 {
    (day as f64 / extrapolation::SEASONAL_PERIOD_DAYS).sin() * extrapolation::SEASONAL_AMPLITUDE
}

/// Appends rows until `forecast` reaches `HORIZON`. The drift is carried
/// forward on its own; the seasonal term never feeds back into it.
fn extrapolate(forecast: &mut Vec<DailyPoint>, seed: ExtrapolationSeed) {
    let ExtrapolationSeed {
        mut last_forecast,
        mut last_step,
    } = seed;

    for day in forecast.len() + 1..=HORIZON {
        let drift = last_step * extrapolation::MOMENTUM_DAMPING;
        let value = round_half_up(last_forecast + drift + seasonal(day));
        last_forecast = value;
        last_step = drift;
        forecast.push(DailyPoint::projected(
            day,
            value,
            ConfidenceBands::around(value, day),
        ));
    }
}
