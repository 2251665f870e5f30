use serde::{Deserialize, Serialize};

use crate::config::constants::{REFERENCE_PRICE, fallback};

/// A known, upstream-supplied forecast point at day 30, 60 or 90.
///
/// `price` is taken as published. It need not equal
/// `current_price * (1 + change_pct / 100)`; nothing reconciles the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneAnchor {
    pub day: u32,
    pub price: f64,
    pub change_pct: f64,
    pub uncertainty: f64,
}

/// Compile-time description of a fallback anchor. The price is derived
/// from the reference level rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackMilestone {
    pub day: u32,
    pub change_pct: f64,
    pub uncertainty: f64,
}

impl FallbackMilestone {
    /// Snapshot key, e.g. "30d".
    pub fn key(&self) -> String {
        format!("{}d", self.day)
    }

    pub fn anchor(&self) -> MilestoneAnchor {
        MilestoneAnchor {
            day: self.day,
            price: REFERENCE_PRICE * (1.0 + self.change_pct / 100.0),
            change_pct: self.change_pct,
            uncertainty: self.uncertainty,
        }
    }
}

/// The three anchors, always ordered 30 / 60 / 90.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestones {
    pub anchors: [MilestoneAnchor; 3],
}

impl Milestones {
    pub fn fallback() -> Self {
        Self {
            anchors: fallback::MILESTONES.map(|m| m.anchor()),
        }
    }

    /// The anchor sitting exactly on `day`, if any.
    pub fn at(&self, day: u32) -> Option<&MilestoneAnchor> {
        self.anchors.iter().find(|a| a.day == day)
    }

    /// (c30, c60, c90)
    pub fn change_pcts(&self) -> (f64, f64, f64) {
        let [a30, a60, a90] = &self.anchors;
        (a30.change_pct, a60.change_pct, a90.change_pct)
    }
}

impl Default for Milestones {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_anchors_derive_price_from_reference() {
        let m = Milestones::fallback();
        assert_eq!(m.change_pcts(), (2.7, 5.4, 8.2));
        let a90 = m.at(90).unwrap();
        assert_eq!(a90.uncertainty, 230.0);
        assert_eq!(a90.price.round(), 6583.0);
        assert_eq!(m.at(30).unwrap().price.round(), 6248.0);
        assert!(m.at(45).is_none());
    }

    #[test]
    fn fallback_keys() {
        let keys: Vec<_> = fallback::MILESTONES.iter().map(|m| m.key()).collect();
        assert_eq!(keys, ["30d", "60d", "90d"]);
    }
}
