use crate::{
    config::{
        PeriodViewConfig,
        constants::scenario::{DOWNSIDE_COMPRESSION, MIN_RANGE},
    },
    models::{PeriodForecast, ScenarioKind, ScenarioOutcome},
    utils::{pct_change, round_half_up, round_to_decimals},
};

/// Spread (index points) between the base and optimistic outcomes.
pub fn scenario_range(forecast: &PeriodForecast, view: &PeriodViewConfig) -> f64 {
    round_half_up(forecast.uncertainty_pt * view.uncertainty_scale).max(MIN_RANGE)
}

/// Base / optimistic / pessimistic outcomes for one horizon, in that order.
///
/// The downside is deliberately narrower than the upside
/// (`DOWNSIDE_COMPRESSION` of the range). Probabilities come straight from the
/// view config and have no relation to the spread.
pub fn decompose(
    forecast: &PeriodForecast,
    view: &PeriodViewConfig,
    current_price: f64,
) -> [ScenarioOutcome; 3] {
    let range = scenario_range(forecast, view);
    let [base_prob, optimistic_prob, pessimistic_prob] = view.probabilities;

    let outcome = |name, probability, value: f64| ScenarioOutcome {
        name,
        probability,
        value,
        change_pct: round_to_decimals(pct_change(value, current_price), 1),
    };

    [
        outcome(ScenarioKind::Base, base_prob, forecast.value),
        outcome(
            ScenarioKind::Optimistic,
            optimistic_prob,
            forecast.value + round_half_up(range),
        ),
        outcome(
            ScenarioKind::Pessimistic,
            pessimistic_prob,
            forecast.value - round_half_up(range * DOWNSIDE_COMPRESSION),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::REFERENCE_PRICE;
    use crate::domain::ForecastPeriod;

    fn forecast(period: ForecastPeriod, value: f64, uncertainty_pt: f64) -> PeriodForecast {
        PeriodForecast {
            period,
            value,
            change_pct: 0.0,
            uncertainty_pt,
        }
    }

    #[test]
    fn ninety_day_fallback_scenarios() {
        let period = ForecastPeriod::D90;
        let f = forecast(period, 6583.0, 230.0);
        assert_eq!(scenario_range(&f, period.view()), 265.0);

        let [base, optimistic, pessimistic] = decompose(&f, period.view(), REFERENCE_PRICE);
        assert_eq!((base.name, base.probability, base.value), (ScenarioKind::Base, 55, 6583.0));
        assert_eq!(base.change_pct, 8.2);
        assert_eq!((optimistic.value, optimistic.change_pct), (6848.0, 12.6));
        assert_eq!(optimistic.probability, 30);
        assert_eq!((pessimistic.value, pessimistic.change_pct), (6358.0, 4.5));
        assert_eq!(pessimistic.probability, 15);
    }

    #[test]
    fn range_is_floored() {
        let period = ForecastPeriod::D3;
        let f = forecast(period, 6100.0, 89.0);
        // 89 * 0.6 = 53.4 -> floored at 70
        assert_eq!(scenario_range(&f, period.view()), 70.0);
        let [_, optimistic, pessimistic] = decompose(&f, period.view(), REFERENCE_PRICE);
        assert_eq!(optimistic.value, 6170.0);
        // 70 * 0.85 = 59.5 -> 60
        assert_eq!(pessimistic.value, 6040.0);
    }

    #[test]
    fn outcomes_are_ordered_and_weights_sum_to_100() {
        for period in ForecastPeriod::ALL {
            let f = forecast(period, 6300.0, 150.0);
            let [base, optimistic, pessimistic] = decompose(&f, period.view(), REFERENCE_PRICE);
            assert!(pessimistic.value < base.value && base.value < optimistic.value);
            assert!(base.value - pessimistic.value < optimistic.value - base.value);
            let total: u32 = [base, optimistic, pessimistic]
                .iter()
                .map(|o| o.probability as u32)
                .sum();
            assert_eq!(total, 100, "{}", period);
        }
    }

    #[test]
    fn zero_price_gives_flat_change() {
        let period = ForecastPeriod::D30;
        let f = forecast(period, 6248.0, 120.0);
        let outcomes = decompose(&f, period.view(), 0.0);
        assert!(outcomes.iter().all(|o| o.change_pct == 0.0));
    }
}
