// Top Level Constants
/// Length of the forecast segment of every synthesized chart series (days).
pub const HORIZON: usize = 365;

/// Reference index level used whenever the snapshot has no usable current price.
pub const REFERENCE_PRICE: f64 = 6083.86;

pub mod series {
    /// Forecast days that carry a chart label ("+30", "+60", ...).
    pub const LABEL_DAYS: &[usize] = &[30, 60, 90, 180, 365];

    pub mod band68 {
        pub const BASE: f64 = 25.0;
        pub const PER_DAY: f64 = 0.7;
    }

    pub mod band95 {
        pub const BASE: f64 = 50.0;
        pub const PER_DAY: f64 = 1.4;
    }
}

pub mod extrapolation {
    /// Damped persistence applied to the last observed step each day.
    pub const MOMENTUM_DAMPING: f64 = 0.985;
    /// Step assumed when fewer than two forecast points were supplied.
    pub const DEFAULT_STEP: f64 = 2.0;
    pub const SEASONAL_PERIOD_DAYS: f64 = 24.0;
    pub const SEASONAL_AMPLITUDE: f64 = 2.1;
}

pub mod milestones {
    /// Share of the 60->90 day slope carried past the last anchor.
    pub const LONG_HORIZON_DAMPING: f64 = 0.6;
    /// Days between consecutive anchors.
    pub const ANCHOR_SPACING_DAYS: f64 = 30.0;
    /// Floor applied to upstream anchor uncertainty (index points).
    pub const ANCHOR_UNCERTAINTY_FLOOR: f64 = 80.0;

    pub mod uncertainty {
        pub const BASE: f64 = 65.0;
        pub const SQRT_DAY_COEFF: f64 = 14.0;
        pub const FLOOR: f64 = 65.0;
    }
}

pub mod scenario {
    /// Minimum spread between the base and optimistic outcome (index points).
    pub const MIN_RANGE: f64 = 70.0;
    /// Downside spread as a share of the upside spread.
    pub const DOWNSIDE_COMPRESSION: f64 = 0.85;
}

pub mod fallback {
    use crate::models::FallbackMilestone;

    pub const MILESTONES: [FallbackMilestone; 3] = [
        FallbackMilestone { day: 30, change_pct: 2.7, uncertainty: 120.0 },
        FallbackMilestone { day: 60, change_pct: 5.4, uncertainty: 170.0 },
        FallbackMilestone { day: 90, change_pct: 8.2, uncertainty: 230.0 },
    ];

    pub const REGIME_NAME: &str = "Normal";
    pub const REGIME_PROBABILITY: f64 = 0.68;
}

pub mod bootstrap {
    pub const HISTORY_DAYS: usize = 30;

    // Random walk for the placeholder history
    pub const WALK_BIAS: f64 = 0.48;
    pub const WALK_STEP: f64 = 40.0;
    pub const WALK_FLOOR: f64 = 5800.0;
    pub const WALK_CAP: f64 = 6200.0;

    // Placeholder forecast
    pub const TREND_PER_DAY: f64 = 2.2;
    pub const WAVE_PERIOD_DAYS: f64 = 15.0;
    pub const WAVE_AMPLITUDE: f64 = 30.0;
    pub const NOISE: f64 = 20.0;
}
