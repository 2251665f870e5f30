//! Point forecasts for the seven published horizons, derived from the three
//! upstream anchors at day 30 / 60 / 90.

use std::collections::BTreeMap;

use crate::{
    config::constants::milestones::{
        ANCHOR_SPACING_DAYS, ANCHOR_UNCERTAINTY_FLOOR, LONG_HORIZON_DAMPING, uncertainty,
    },
    domain::ForecastPeriod,
    models::{Milestones, PeriodForecast},
    utils::{round_half_up, round_to_decimals},
};

#[derive(Debug, Clone, Copy)]
pub struct MilestoneInterpolator {
    current_price: f64,
    milestones: Milestones,
}

impl MilestoneInterpolator {
    pub fn new(current_price: f64, milestones: Milestones) -> Self {
        Self {
            current_price,
            milestones,
        }
    }

    /// Unrounded percent change at `day`.
    ///
    /// Piecewise linear through (0, 0), (30, c30), (60, c60), (90, c90). Past
    /// day 90 the 60->90 slope is carried on at `LONG_HORIZON_DAMPING` of its size.
    pub fn change_pct_at(&self, day: f64) -> f64 {
        let (c30, c60, c90) = self.milestones.change_pcts();
        let spacing = ANCHOR_SPACING_DAYS;

        // Exact on the anchors themselves
        if day == spacing {
            return c30;
        } else if day == 2.0 * spacing {
            return c60;
        } else if day == 3.0 * spacing {
            return c90;
        }

        if day <= spacing {
            (c30 / spacing) * day
        } else if day <= 2.0 * spacing {
            c30 + ((c60 - c30) / spacing) * (day - spacing)
        } else if day <= 3.0 * spacing {
            c60 + ((c90 - c60) / spacing) * (day - 2.0 * spacing)
        } else {
            let long_term_slope = ((c90 - c60) / spacing) * LONG_HORIZON_DAMPING;
            c90 + long_term_slope * (day - 3.0 * spacing)
        }
    }

    /// Uncertainty (index points) for a horizon with no anchor: grows with √day.
    pub fn uncertainty_at(day: f64) -> f64 {
        round_half_up(uncertainty::BASE + day.sqrt() * uncertainty::SQRT_DAY_COEFF)
            .max(uncertainty::FLOOR)
    }

    pub fn forecast(&self, period: ForecastPeriod) -> PeriodForecast {
        let day = period.days();

        // Anchored horizons publish the upstream numbers as they are
        if let Some(anchor) = self.milestones.at(day) {
            return PeriodForecast {
                period,
                value: round_half_up(anchor.price),
                change_pct: anchor.change_pct,
                uncertainty_pt: round_half_up(anchor.uncertainty).max(ANCHOR_UNCERTAINTY_FLOOR),
            };
        }

        let day = day as f64;
        let change_pct = round_to_decimals(self.change_pct_at(day), 1);
        PeriodForecast {
            period,
            value: round_half_up(self.current_price * (1.0 + change_pct / 100.0)),
            change_pct,
            uncertainty_pt: Self::uncertainty_at(day),
        }
    }

    pub fn forecast_all(&self) -> BTreeMap<ForecastPeriod, PeriodForecast> {
        ForecastPeriod::ALL
            .iter()
            .map(|&period| (period, self.forecast(period)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::REFERENCE_PRICE;
    use crate::models::MilestoneAnchor;
    use approx::assert_abs_diff_eq;

    fn fallback() -> MilestoneInterpolator {
        MilestoneInterpolator::new(REFERENCE_PRICE, Milestones::fallback())
    }

    #[test]
    fn anchors_are_exact_and_origin_is_zero() {
        let interp = fallback();
        assert_eq!(interp.change_pct_at(0.0), 0.0);
        assert_eq!(interp.change_pct_at(30.0), 2.7);
        assert_eq!(interp.change_pct_at(60.0), 5.4);
        assert_eq!(interp.change_pct_at(90.0), 8.2);
    }

    #[test]
    fn interpolates_between_anchors() {
        let interp = fallback();
        assert_abs_diff_eq!(interp.change_pct_at(15.0), 1.35, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.change_pct_at(45.0), 4.05, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.change_pct_at(75.0), 6.8, epsilon = 1e-12);
    }

    #[test]
    fn long_horizon_uses_damped_slope() {
        let interp = fallback();
        // 8.2 + 0.6 * (2.8 / 30) * 90
        assert_abs_diff_eq!(interp.change_pct_at(180.0), 13.24, epsilon = 1e-9);
        assert_abs_diff_eq!(interp.change_pct_at(365.0), 23.6, epsilon = 1e-9);
    }

    #[test]
    fn uncertainty_grows_with_sqrt_day() {
        assert_eq!(MilestoneInterpolator::uncertainty_at(0.0), 65.0);
        assert_eq!(MilestoneInterpolator::uncertainty_at(3.0), 89.0);
        assert_eq!(MilestoneInterpolator::uncertainty_at(15.0), 119.0);
        assert_eq!(MilestoneInterpolator::uncertainty_at(365.0), 332.0);

        let mut previous = 0.0;
        for day in 0..=400 {
            let u = MilestoneInterpolator::uncertainty_at(day as f64);
            assert!(u >= previous && u >= 65.0);
            previous = u;
        }
    }

    #[test]
    fn fallback_forecasts() {
        let all = fallback().forecast_all();
        assert_eq!(all.len(), 7);

        let d90 = all[&ForecastPeriod::D90];
        assert_eq!((d90.value, d90.change_pct, d90.uncertainty_pt), (6583.0, 8.2, 230.0));

        let d180 = all[&ForecastPeriod::D180];
        assert_eq!((d180.value, d180.change_pct, d180.uncertainty_pt), (6887.0, 13.2, 253.0));

        let d15 = all[&ForecastPeriod::D15];
        assert_eq!((d15.value, d15.change_pct, d15.uncertainty_pt), (6169.0, 1.4, 119.0));

        let d3 = all[&ForecastPeriod::D3];
        assert_eq!((d3.value, d3.change_pct), (6102.0, 0.3));

        let d365 = all[&ForecastPeriod::D365];
        assert_eq!((d365.value, d365.change_pct, d365.uncertainty_pt), (7520.0, 23.6, 332.0));

        assert_eq!(all[&ForecastPeriod::D30].value, 6248.0);
        assert_eq!(all[&ForecastPeriod::D60].value, 6412.0);
    }

    #[test]
    fn anchor_values_are_not_reconciled_with_current_price() {
        let milestones = Milestones {
            anchors: [
                MilestoneAnchor { day: 30, price: 7000.4, change_pct: 1.0, uncertainty: 40.0 },
                MilestoneAnchor { day: 60, price: 7100.0, change_pct: 2.0, uncertainty: 150.6 },
                MilestoneAnchor { day: 90, price: 7200.0, change_pct: 3.0, uncertainty: 200.0 },
            ],
        };
        let interp = MilestoneInterpolator::new(5000.0, milestones);
        let d30 = interp.forecast(ForecastPeriod::D30);
        assert_eq!((d30.value, d30.change_pct), (7000.0, 1.0));
        // floored at 80
        assert_eq!(d30.uncertainty_pt, 80.0);
        assert_eq!(interp.forecast(ForecastPeriod::D60).uncertainty_pt, 151.0);

        // Non-anchor horizons are priced off the current price
        let d15 = interp.forecast(ForecastPeriod::D15);
        assert_eq!((d15.value, d15.change_pct), (5025.0, 0.5));
    }
}
