//! Declaration values.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Largest integral magnitude an `f64` holds without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A declaration value, either a bare number or a piece of CSS text.
///
/// Integral numbers display and serialize without a fractional part, so
/// `CssValue::from(5)` becomes `5` rather than `5.0`.
///
/// # Example
///
/// ```rust
/// use responsive_style::CssValue;
///
/// assert_eq!(CssValue::from(5).to_string(), "5");
/// assert_eq!(CssValue::from(1.5).to_string(), "1.5");
/// assert_eq!(CssValue::from("auto").to_string(), "auto");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A unitless number, e.g. a `columnCount` or a pixel width awaiting a unit.
    Number(f64),
    /// Any textual value, e.g. `"red"`, `"1px solid red"` or `"5em"`.
    Text(String),
}

impl CssValue {
    /// Returns `true` if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, CssValue::Number(_))
    }

    /// Returns the number, if this value is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }

    /// Returns the text, if this value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Number(_) => None,
            CssValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CssValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            CssValue::Number(n) => serializer.serialize_f64(*n),
            CssValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

impl From<f32> for CssValue {
    fn from(value: f32) -> Self {
        CssValue::Number(value.into())
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Number(value.into())
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        CssValue::Number(value.into())
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_number_display() {
        assert_eq!(CssValue::from(500).to_string(), "500");
        assert_eq!(CssValue::from(0).to_string(), "0");
        assert_eq!(CssValue::from(-3).to_string(), "-3");
    }

    #[test]
    fn test_fractional_number_display() {
        assert_eq!(CssValue::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_serialize_integral_as_integer() {
        assert_eq!(serde_json::to_string(&CssValue::from(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&CssValue::from(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&CssValue::from("red")).unwrap(),
            "\"red\""
        );
    }

    #[test]
    fn test_deserialize_number_or_text() {
        let number: CssValue = serde_json::from_str("12").unwrap();
        let text: CssValue = serde_json::from_str("\"12px\"").unwrap();
        assert_eq!(number, CssValue::Number(12.0));
        assert_eq!(text, CssValue::Text("12px".into()));
    }

    #[test]
    fn test_accessors() {
        let number = CssValue::from(4);
        let text = CssValue::from("auto");
        assert!(number.is_number());
        assert_eq!(number.as_f64(), Some(4.0));
        assert_eq!(number.as_str(), None);
        assert!(!text.is_number());
        assert_eq!(text.as_str(), Some("auto"));
    }
}
