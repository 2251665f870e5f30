use serde::{Deserialize, Serialize};

use crate::config::constants::series::{LABEL_DAYS, band68, band95};
use crate::utils::round_half_up;

/// One chart row. Historical rows carry `actual` only; forecast rows carry
/// `forecast` plus the four band edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyPoint {
    pub label: String,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub lower68: Option<f64>,
    pub upper68: Option<f64>,
    pub lower95: Option<f64>,
    pub upper95: Option<f64>,
}

impl DailyPoint {
    pub fn historical(label: impl Into<String>, actual: Option<f64>) -> Self {
        Self {
            label: label.into(),
            actual,
            ..Default::default()
        }
    }

    /// A forecast row for day `day` (1-based offset past the last close).
    pub fn projected(day: usize, value: f64, bands: ConfidenceBands) -> Self {
        Self {
            label: forecast_label(day),
            actual: None,
            forecast: Some(value),
            lower68: Some(bands.lower68),
            upper68: Some(bands.upper68),
            lower95: Some(bands.lower95),
            upper95: Some(bands.upper95),
        }
    }

    pub fn is_forecast(&self) -> bool {
        self.forecast.is_some()
    }
}

/// 68% / 95% band edges around one forecast value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBands {
    pub lower68: f64,
    pub upper68: f64,
    pub lower95: f64,
    pub upper95: f64,
}

impl ConfidenceBands {
    /// Half-widths grow linearly with the day offset.
    pub fn half_widths(day: usize) -> (f64, f64) {
        let d = day as f64;
        (
            round_half_up(band68::BASE + d * band68::PER_DAY),
            round_half_up(band95::BASE + d * band95::PER_DAY),
        )
    }

    pub fn around(value: f64, day: usize) -> Self {
        let (w68, w95) = Self::half_widths(day);
        Self {
            lower68: value - w68,
            upper68: value + w68,
            lower95: value - w95,
            upper95: value + w95,
        }
    }
}

/// "+30", "+60", ... on labelled days, empty otherwise.
pub fn forecast_label(day: usize) -> String {
    if LABEL_DAYS.contains(&day) {
        format!("+{}", day)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_scale_with_day() {
        let b = ConfidenceBands::around(6100.0, 1);
        // 25.7 -> 26, 51.4 -> 51
        assert_eq!(b.lower68, 6074.0);
        assert_eq!(b.upper68, 6126.0);
        assert_eq!(b.lower95, 6049.0);
        assert_eq!(b.upper95, 6151.0);

        let (w68, w95) = ConfidenceBands::half_widths(365);
        assert_eq!(w68, 281.0); // 25 + 255.5
        assert_eq!(w95, 561.0);
    }

    #[test]
    fn labels_only_on_milestone_days() {
        assert_eq!(forecast_label(30), "+30");
        assert_eq!(forecast_label(365), "+365");
        assert_eq!(forecast_label(31), "");
        assert_eq!(forecast_label(1), "");
    }
}
