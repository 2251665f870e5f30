use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
    analysis::numeric_guard::{NumericInput, guard},
    config::{
        DEBUG_FLAGS,
        constants::{REFERENCE_PRICE, fallback},
    },
    domain::DailyPoint,
    models::{Driver, MilestoneAnchor, Milestones},
    utils::round_to_decimals,
};

// ----------------------------------------------------------------------------
// Wire shape. Every leaf is an untyped JSON value so that bad numbers reach the
// numeric guard instead of failing the decode. Blocks and list entries of the
// wrong shape decode to `None` on their own without failing the document.
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    pub current_price: Option<Value>,
    pub daily_change: Option<Value>,
    pub daily_pct: Option<Value>,
    pub last_update: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub history: Option<Vec<Option<RawHistoryPoint>>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub forecast: Option<Vec<Option<RawForecastPoint>>>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub key_milestones: Option<BTreeMap<String, Option<RawMilestone>>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub key_drivers: Option<Vec<Option<RawDriver>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub regime: Option<RawRegime>,
    /// Either `{"overall": x}` or a bare number.
    pub model_confidence: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHistoryPoint {
    pub date: Option<Value>,
    pub actual: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecastPoint {
    pub forecast: Option<Value>,
    pub actual: Option<Value>,
    pub lower68: Option<Value>,
    pub upper68: Option<Value>,
    pub lower95: Option<Value>,
    pub upper95: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMilestone {
    pub price: Option<Value>,
    pub change_pct: Option<Value>,
    pub uncertainty: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDriver {
    pub feature: Option<Value>,
    pub attribution: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRegime {
    pub current: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub probabilities: Option<Map<String, Value>>,
}

/// A block of the wrong shape becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A non-array becomes `None`; inside an array each bad entry becomes `None`
/// and keeps its position.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// A non-object becomes `None`; each bad entry becomes `None` under its key.
fn lenient_map<'de, D, T>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .map(|(key, item)| (key, serde_json::from_value(item).ok()))
                .collect(),
        ),
        _ => None,
    })
}

impl RawSnapshot {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// ----------------------------------------------------------------------------
// Validated snapshot
// ----------------------------------------------------------------------------

/// One upstream forecast entry with every field already reduced to a finite
/// number or `None`. Day offset is implicit in its position (first entry = day 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ForecastInput {
    pub forecast: Option<f64>,
    pub actual: Option<f64>,
    pub lower68: Option<f64>,
    pub upper68: Option<f64>,
    pub lower95: Option<f64>,
    pub upper95: Option<f64>,
}

impl From<&RawForecastPoint> for ForecastInput {
    fn from(raw: &RawForecastPoint) -> Self {
        Self {
            forecast: raw.forecast.to_finite(),
            actual: raw.actual.to_finite(),
            lower68: raw.lower68.to_finite(),
            upper68: raw.upper68.to_finite(),
            lower95: raw.lower95.to_finite(),
            upper95: raw.upper95.to_finite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeSnapshot {
    pub current: Option<String>,
    /// `None` when the snapshot has no probability map at all.
    pub probabilities: Option<Vec<(String, f64)>>,
}

/// An upstream snapshot with all fallback substitution done once, up front.
/// The numeric core only ever sees this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub current_price: f64,
    pub daily_change: f64,
    pub daily_pct: f64,
    pub last_update: Option<String>,
    /// 0.0 - 1.0
    pub model_confidence: f64,
    pub history: Vec<DailyPoint>,
    pub forecast: Vec<ForecastInput>,
    /// Both `history` and `forecast` were present upstream. Without them the
    /// chart keeps its placeholder series.
    pub series_supplied: bool,
    pub milestones: Milestones,
    pub drivers: Option<Vec<Driver>>,
    pub regime: Option<RegimeSnapshot>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Snapshot {
    /// The documented constants, used before any real snapshot has arrived.
    pub fn fallback() -> Self {
        Self {
            current_price: REFERENCE_PRICE,
            daily_change: 0.0,
            daily_pct: 0.0,
            last_update: None,
            model_confidence: 0.0,
            history: Vec::new(),
            forecast: Vec::new(),
            series_supplied: false,
            milestones: Milestones::fallback(),
            drivers: None,
            regime: None,
        }
    }

    pub fn from_raw(raw: &RawSnapshot) -> Self {
        let mut substituted: Vec<&'static str> = Vec::new();

        // Used as a divisor downstream, so zero and negatives count as missing
        let current_price = match raw.current_price.to_finite() {
            Some(p) if p > 0.0 => p,
            _ => {
                substituted.push("current_price");
                REFERENCE_PRICE
            }
        };

        let history: Vec<DailyPoint> = raw
            .history
            .iter()
            .flatten()
            .map(|entry| match entry {
                Some(p) => DailyPoint::historical(text_of(&p.date).unwrap_or_default(), p.actual.to_finite()),
                None => DailyPoint::historical(String::new(), None),
            })
            .collect();

        let forecast: Vec<ForecastInput> = raw
            .forecast
            .iter()
            .flatten()
            .map(|entry| entry.as_ref().map(ForecastInput::from).unwrap_or_default())
            .collect();

        let (derived_change, derived_pct) = derive_daily_move(&history);
        let daily_change = raw.daily_change.to_finite().unwrap_or_else(|| {
            substituted.push("daily_change");
            derived_change
        });
        let daily_pct = raw.daily_pct.to_finite().unwrap_or_else(|| {
            substituted.push("daily_pct");
            derived_pct
        });

        let model_confidence = guard(&confidence_of(raw.model_confidence.as_ref()), 0.0);

        let milestones = parse_milestones(raw.key_milestones.as_ref(), &mut substituted);

        let snapshot = Self {
            current_price,
            daily_change,
            daily_pct,
            last_update: text_of(&raw.last_update),
            model_confidence,
            history,
            forecast,
            series_supplied: raw.history.is_some() && raw.forecast.is_some(),
            milestones,
            drivers: raw.key_drivers.as_ref().map(|d| parse_drivers(d)),
            regime: raw.regime.as_ref().map(parse_regime),
        };

        if DEBUG_FLAGS.log_fallbacks && !substituted.is_empty() {
            log::debug!("Snapshot fallbacks applied: {}", substituted.join(", "));
        }
        if !snapshot.series_supplied {
            log::warn!("Snapshot has no history/forecast block; chart keeps the placeholder series");
        }

        snapshot
    }
}

/// Daily move from the last two usable closes: (points, percent), both rounded to 2dp.
pub fn derive_daily_move(history: &[DailyPoint]) -> (f64, f64) {
    let mut closes = history.iter().rev().filter_map(|p| p.actual);
    match (closes.next(), closes.next()) {
        (Some(last), Some(prev)) if prev.abs() > f64::EPSILON => {
            let change = round_to_decimals(last - prev, 2);
            (change, round_to_decimals(change / prev * 100.0, 2))
        }
        _ => (0.0, 0.0),
    }
}

fn text_of(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn confidence_of(raw: Option<&Value>) -> Option<&Value> {
    match raw? {
        Value::Object(block) => block.get("overall"),
        scalar => Some(scalar),
    }
}

fn parse_milestones(
    raw: Option<&BTreeMap<String, Option<RawMilestone>>>,
    substituted: &mut Vec<&'static str>,
) -> Milestones {
    let mut any_missing = false;
    let anchors = fallback::MILESTONES.map(|fb| {
        let default = fb.anchor();
        match raw.and_then(|m| m.get(&fb.key())).and_then(Option::as_ref) {
            Some(block) => MilestoneAnchor {
                day: fb.day,
                price: guard(&block.price, default.price),
                change_pct: guard(&block.change_pct, default.change_pct),
                uncertainty: guard(&block.uncertainty, default.uncertainty),
            },
            None => {
                any_missing = true;
                default
            }
        }
    });
    if any_missing {
        substituted.push("key_milestones");
    }
    Milestones { anchors }
}

fn parse_drivers(raw: &[Option<RawDriver>]) -> Vec<Driver> {
    let drivers: Vec<Driver> = raw
        .iter()
        .flatten()
        .filter_map(|d| {
            let feature = text_of(&d.feature)?;
            Some(Driver {
                feature,
                attribution: guard(&d.attribution, 0.0),
            })
        })
        .collect();

    if drivers.len() < raw.len() {
        log::debug!("Dropped {} driver entries without a feature name", raw.len() - drivers.len());
    }
    drivers
}

fn parse_regime(raw: &RawRegime) -> RegimeSnapshot {
    RegimeSnapshot {
        current: match &raw.current {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        probabilities: raw.probabilities.as_ref().map(|map| {
            map.iter()
                .map(|(name, p)| (name.clone(), guard(p, 0.0)))
                .collect()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parse(text: &str) -> Snapshot {
        Snapshot::from_raw(&RawSnapshot::from_json(text).unwrap())
    }

    #[test]
    fn empty_object_gives_fallback_values() {
        let s = parse("{}");
        assert_eq!(s.current_price, REFERENCE_PRICE);
        assert_eq!(s.milestones, Milestones::fallback());
        assert!(!s.series_supplied);
        assert!(s.history.is_empty() && s.forecast.is_empty());
        assert!(s.drivers.is_none() && s.regime.is_none());
        assert_eq!((s.daily_change, s.daily_pct), (0.0, 0.0));
    }

    #[test]
    fn zero_or_garbage_price_falls_back() {
        assert_eq!(parse(r#"{"current_price": 0}"#).current_price, REFERENCE_PRICE);
        assert_eq!(parse(r#"{"current_price": "n/a"}"#).current_price, REFERENCE_PRICE);
        assert_eq!(parse(r#"{"current_price": "6,100.5"}"#).current_price, 6100.5);
    }

    #[test]
    fn forecast_entries_are_guarded_field_by_field() {
        let s = parse(
            r#"{"history": [], "forecast": [
                {"forecast": 6100, "lower68": "x", "upper95": 6300},
                null,
                {"actual": "6120.4"}
            ]}"#,
        );
        assert!(s.series_supplied);
        assert_eq!(s.forecast.len(), 3);
        assert_eq!(s.forecast[0].forecast, Some(6100.0));
        assert_eq!(s.forecast[0].lower68, None);
        assert_eq!(s.forecast[0].upper95, Some(6300.0));
        assert_eq!(s.forecast[1], ForecastInput::default());
        assert_eq!(s.forecast[2].actual, Some(6120.4));
    }

    #[test]
    fn bare_number_model_confidence_is_accepted() {
        let s = parse(r#"{"current_price": 6500, "model_confidence": 0.82}"#);
        assert_eq!(s.current_price, 6500.0);
        assert_eq!(s.model_confidence, 0.82);
        assert_eq!(parse(r#"{"model_confidence": {"overall": "high"}}"#).model_confidence, 0.0);
    }

    #[test]
    fn bad_forecast_entry_keeps_its_slot() {
        let s = parse(r#"{"current_price": 6500, "history": [], "forecast": [{"forecast": 6510}, "n/a"]}"#);
        assert_eq!(s.current_price, 6500.0);
        assert!(s.series_supplied);
        assert_eq!(s.forecast.len(), 2);
        assert_eq!(s.forecast[0].forecast, Some(6510.0));
        assert_eq!(s.forecast[1], ForecastInput::default());
    }

    #[test]
    fn misshapen_blocks_degrade_one_at_a_time() {
        let s = parse(
            r#"{
                "current_price": 6500,
                "history": [{"date": "2025-01-02", "actual": 6400}, 42],
                "forecast": "pending",
                "key_milestones": {"30d": [1, 2], "60d": {"price": 6700, "change_pct": 5.0}},
                "key_drivers": {"S&P 500": 0.3},
                "regime": "calm"
            }"#,
        );
        assert_eq!(s.current_price, 6500.0);
        assert_eq!(s.history.len(), 2);
        assert_eq!(s.history[1].actual, None);
        // a forecast block that is not a list counts as absent
        assert!(!s.series_supplied);
        assert_eq!(s.milestones.anchors[0], Milestones::fallback().anchors[0]);
        assert_eq!(s.milestones.anchors[1].price, 6700.0);
        assert!(s.drivers.is_none());
        assert!(s.regime.is_none());

        let odd_map = parse(r#"{"regime": {"current": "Crisis", "probabilities": [0.7]}}"#);
        let regime = odd_map.regime.unwrap();
        assert_eq!(regime.current.as_deref(), Some("Crisis"));
        assert!(regime.probabilities.is_none());
    }

    #[test]
    fn missing_milestones_are_reported_once() {
        let mut substituted = Vec::new();
        parse_milestones(None, &mut substituted);
        assert_eq!(substituted, ["key_milestones"]);

        let mut substituted = Vec::new();
        let partial = RawSnapshot::from_json(r#"{"key_milestones": {"30d": {"price": 6300}}}"#).unwrap();
        parse_milestones(partial.key_milestones.as_ref(), &mut substituted);
        assert_eq!(substituted, ["key_milestones"]);
    }

    #[test]
    fn partial_milestone_block_is_filled_from_fallback_anchor() {
        let s = parse(
            r#"{"key_milestones": {
                "30d": {"price": 6300, "change_pct": 3.1},
                "90d": {"price": "bad", "change_pct": 9.0, "uncertainty": 250}
            }}"#,
        );
        let [a30, a60, a90] = s.milestones.anchors;
        assert_eq!((a30.price, a30.change_pct, a30.uncertainty), (6300.0, 3.1, 120.0));
        assert_eq!(a60, Milestones::fallback().anchors[1]);
        assert_eq!(a90.price, Milestones::fallback().anchors[2].price);
        assert_eq!((a90.change_pct, a90.uncertainty), (9.0, 250.0));
    }

    #[test]
    fn daily_move_is_derived_from_history_when_absent() {
        let s = parse(
            r#"{"history": [
                {"date": "2025-01-02", "actual": 5000},
                {"date": "2025-01-03", "actual": 5100},
                {"date": "2025-01-06", "actual": null}
            ]}"#,
        );
        assert_eq!(s.history.len(), 3);
        assert_eq!(s.history[0].label, "2025-01-02");
        assert_eq!(s.history[2].actual, None);
        assert_abs_diff_eq!(s.daily_change, 100.0);
        assert_abs_diff_eq!(s.daily_pct, 2.0);

        let explicit = parse(r#"{"daily_change": -12.5, "daily_pct": -0.2, "history": []}"#);
        assert_eq!((explicit.daily_change, explicit.daily_pct), (-12.5, -0.2));
    }

    #[test]
    fn drivers_and_regime_are_carried() {
        let s = parse(
            r#"{
                "key_drivers": [{"feature": "S&P 500 (lag 1)", "attribution": 0.35},
                                {"attribution": 0.1},
                                {"feature": "VIX", "attribution": "?"}],
                "regime": {"current": "Crisis", "probabilities": {"Crisis": 0.7, "Normal": "0.3"}},
                "model_confidence": {"overall": 0.82},
                "last_update": "2025-02-03T15:30:01"
            }"#,
        );
        let drivers = s.drivers.unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[1].attribution, 0.0);
        let regime = s.regime.unwrap();
        assert_eq!(regime.current.as_deref(), Some("Crisis"));
        assert_eq!(regime.probabilities.unwrap().len(), 2);
        assert_eq!(s.model_confidence, 0.82);
        assert_eq!(s.last_update.as_deref(), Some("2025-02-03T15:30:01"));
    }
}
