use serde::Serialize;

use crate::config::RiskSeverity;

/// A risk factor relabeled for the active horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketRisk {
    pub severity: RiskSeverity,
    pub title: String,
    pub impact_pt: i32,
    /// "+140pt" / "-160pt"
    pub impact_text: String,
    pub description: String,
}

/// One upstream driver attribution, as published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub feature: String,
    pub attribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: String,
    /// Percent
    pub importance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeEntry {
    pub name: String,
    /// 0.0 - 1.0
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeView {
    pub current: String,
    pub current_probability: f64,
    /// Sorted by probability, highest first.
    pub entries: Vec<RegimeEntry>,
}
