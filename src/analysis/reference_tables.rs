//! Lookups into the static copy tables. The only computation is relabeling
//! risk entries with the active horizon's tag.

use crate::{
    config::{PREDICTION_BASIS, PredictionBasis, RISK_PROFILES, RiskFactor},
    domain::ForecastPeriod,
    models::MarketRisk,
};

/// "+140pt" / "-160pt"
pub fn impact_text(impact: i32) -> String {
    if impact > 0 {
        format!("+{}pt", impact)
    } else {
        format!("{}pt", impact)
    }
}

fn relabel(factor: &RiskFactor, period: ForecastPeriod) -> MarketRisk {
    MarketRisk {
        severity: factor.severity,
        title: factor.title.to_string(),
        impact_pt: factor.impact,
        impact_text: impact_text(factor.impact),
        description: format!("{} ({}) view · {}", period.view().tag, period, factor.description),
    }
}

pub fn market_risks(period: ForecastPeriod) -> [MarketRisk; 3] {
    RISK_PROFILES[period.index()]
        .factors
        .each_ref()
        .map(|factor| relabel(factor, period))
}

pub fn prediction_basis(period: ForecastPeriod) -> &'static PredictionBasis {
    &PREDICTION_BASIS[period.index()]
}
