//! Coercion of loosely-typed upstream values into finite numbers.
//!
//! Every read of a snapshot field goes through [`guard`]: the caller names the
//! fallback, the guard never fails.

use serde_json::Value;

/// Anything that may or may not hold a usable number.
pub trait NumericInput {
    /// The value as a finite `f64`, or `None` for NaN, ±∞, null, missing or non-numeric input.
    fn to_finite(&self) -> Option<f64>;
}

impl NumericInput for f64 {
    #[inline]
    fn to_finite(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl NumericInput for str {
    /// Numeric text, surrounding whitespace and thousands separators allowed ("6,083.86").
    fn to_finite(&self) -> Option<f64> {
        let cleaned: String = self.trim().chars().filter(|&c| c != ',').collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok().and_then(|v| v.to_finite())
    }
}

impl NumericInput for String {
    #[inline]
    fn to_finite(&self) -> Option<f64> {
        self.as_str().to_finite()
    }
}

impl NumericInput for Value {
    fn to_finite(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64().and_then(|v| v.to_finite()),
            Value::String(s) => s.to_finite(),
            // Booleans, null, arrays and objects are never numbers here
            _ => None,
        }
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    #[inline]
    fn to_finite(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::to_finite)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    #[inline]
    fn to_finite(&self) -> Option<f64> {
        (**self).to_finite()
    }
}

/// Returns `value` as a finite number, or `fallback` when it is not one.
#[inline]
pub fn guard<T: NumericInput + ?Sized>(value: &T, fallback: f64) -> f64 {
    value.to_finite().unwrap_or(fallback)
}
