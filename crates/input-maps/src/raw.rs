//! Loosely typed field values as delivered by the settings backend.
//!
//! The backend serializes controller records straight from the simulator's
//! configuration, so the same field can arrive as a number in one snapshot and
//! as text in the next. [`RawValue`] keeps the original shape and offers the
//! two comparisons the normalizer needs: numeric coercion and strict integer
//! equality.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single JSON-shaped field value.
///
/// JSON `null` is never represented here: optional fields decode `null` and a
/// missing key alike to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Number(Number),
    Text(String),
    Sequence(Vec<RawValue>),
    /// Objects and nested nulls; never interpreted, only displayed.
    Other(serde_json::Value),
}

impl RawValue {
    /// Numeric coercion: numbers as-is, text trimmed and parsed (blank text is
    /// zero), booleans as 0/1. Text only counts when it parses to a finite
    /// number, so `"inf"` and `"NaN"` have no numeric value. Sequences and
    /// objects have none either.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
                }
            }
            Self::Flag(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Sequence(_) | Self::Other(_) => None,
        }
    }

    /// Strict integer view: only JSON numbers with an integral value qualify.
    /// Text never compares equal to a number here.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64().or_else(|| integral(n.as_f64()?)),
            _ => None,
        }
    }

    /// Integer view after numeric coercion, for discriminants that may arrive
    /// as text.
    pub fn coerce_integer(&self) -> Option<i64> {
        match self {
            Self::Number(_) => self.as_integer(),
            _ => integral(self.as_number()?),
        }
    }

    /// True for the empty string only; whitespace is a real value.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Element `index` of a sequence value.
    pub fn element(&self, index: usize) -> Option<&RawValue> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    // 2^53: beyond this f64 no longer represents every integer.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "integral and within the exact f64 range"
        )]
        let exact = value as i64;
        Some(exact)
    } else {
        None
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Other(serde_json::Value::Null) => Ok(()),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for RawValue {
    /// Non-finite floats have no JSON form and become a null placeholder.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Other(serde_json::Value::Null), Self::Number)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn decodes_each_json_shape() -> TestResult {
        let values: Vec<RawValue> =
            serde_json::from_str(r#"[true, 3, -0.5, "H1", [0, -1], {"a": 1}]"#)?;
        assert_eq!(values.first(), Some(&RawValue::Flag(true)));
        assert_eq!(values.get(1), Some(&RawValue::from(3)));
        assert_eq!(values.get(2), Some(&RawValue::from(-0.5)));
        assert_eq!(values.get(3), Some(&RawValue::from("H1")));
        assert_eq!(values.get(4), Some(&RawValue::from(vec![0, -1])));
        assert!(matches!(values.get(5), Some(RawValue::Other(_))));
        Ok(())
    }

    #[test]
    fn numeric_coercion_follows_text() {
        assert_eq!(RawValue::from(" 1538 ").as_number(), Some(1538.0));
        assert_eq!(RawValue::from("").as_number(), Some(0.0));
        assert_eq!(RawValue::from("Button 3").as_number(), None);
        assert_eq!(RawValue::from(true).as_number(), Some(1.0));
        assert_eq!(RawValue::from(vec![1]).as_number(), None);
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        for text in ["inf", "-infinity", "NaN", "0x600"] {
            assert_eq!(RawValue::from(text).as_number(), None, "{text}");
            assert_eq!(RawValue::from(text).coerce_integer(), None, "{text}");
        }
        assert_eq!(RawValue::from("1e3").as_number(), Some(1000.0));
    }

    #[test]
    fn strict_integer_ignores_text() {
        assert_eq!(RawValue::from(-1).as_integer(), Some(-1));
        assert_eq!(RawValue::from(1.0).as_integer(), Some(1));
        assert_eq!(RawValue::from(0.5).as_integer(), None);
        assert_eq!(RawValue::from("1").as_integer(), None);
    }

    #[test]
    fn coerced_integer_accepts_text_codes() {
        assert_eq!(RawValue::from("1538").coerce_integer(), Some(1538));
        assert_eq!(RawValue::from(768).coerce_integer(), Some(768));
        assert_eq!(RawValue::from("15.5").coerce_integer(), None);
    }

    #[test]
    fn blank_is_only_the_empty_string() {
        assert!(RawValue::from("").is_blank());
        assert!(!RawValue::from(" ").is_blank());
        assert!(!RawValue::from(0).is_blank());
    }

    #[test]
    fn display_matches_source_form() {
        assert_eq!(RawValue::from(2).to_string(), "2");
        assert_eq!(RawValue::from(-0.5).to_string(), "-0.5");
        assert_eq!(RawValue::from("Button 3").to_string(), "Button 3");
        assert_eq!(RawValue::from(vec![0, 35]).to_string(), "0,35");
        assert_eq!(RawValue::from(f64::NAN).to_string(), "");
    }
}
