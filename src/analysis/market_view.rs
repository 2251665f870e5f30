//! Driver importances and the regime panel. Both are consumed as published;
//! this module only reshapes them and supplies placeholders.

use itertools::Itertools;

use crate::{
    config::{
        DEBUG_FLAGS, FALLBACK_DRIVERS, FALLBACK_REGIMES,
        constants::fallback::{REGIME_NAME, REGIME_PROBABILITY},
    },
    models::{Driver, FeatureImportance, RegimeEntry, RegimeSnapshot, RegimeView},
};

/// Display name of a feature: anything from the first `" ("` on is a unit or
/// source annotation and is dropped.
pub fn feature_name(raw: &str) -> &str {
    raw.split(" (").next().unwrap_or(raw)
}

pub fn feature_importances(drivers: Option<&[Driver]>) -> Vec<FeatureImportance> {
    match drivers {
        Some(drivers) => drivers
            .iter()
            .map(|d| FeatureImportance {
                feature: feature_name(&d.feature).to_string(),
                importance: d.attribution * 100.0,
            })
            .collect(),
        None => {
            if DEBUG_FLAGS.log_fallbacks {
                log::debug!("No key drivers in snapshot, using placeholder importances");
            }
            FALLBACK_DRIVERS
                .iter()
                .map(|&(feature, importance)| FeatureImportance {
                    feature: feature.to_string(),
                    importance,
                })
                .collect()
        }
    }
}

pub fn regime_view(regime: Option<&RegimeSnapshot>) -> RegimeView {
    let current = regime
        .and_then(|r| r.current.clone())
        .unwrap_or_else(|| REGIME_NAME.to_string());

    let probabilities = regime.and_then(|r| r.probabilities.as_deref());

    // Zero counts as missing for the headline figure
    let current_probability = probabilities
        .and_then(|list| list.iter().find(|(name, _)| *name == current))
        .map(|&(_, p)| p)
        .filter(|&p| p != 0.0)
        .unwrap_or(REGIME_PROBABILITY);

    let entries: Vec<RegimeEntry> = match probabilities {
        Some(list) => list
            .iter()
            .map(|(name, p)| RegimeEntry {
                name: name.clone(),
                probability: *p,
            })
            .collect(),
        None => FALLBACK_REGIMES
            .iter()
            .map(|&(name, p)| RegimeEntry {
                name: name.to_string(),
                probability: p,
            })
            .collect(),
    };

    let entries = entries
        .into_iter()
        .sorted_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.name.cmp(&b.name))
        })
        .collect();

    RegimeView {
        current,
        current_probability,
        entries,
    }
}
