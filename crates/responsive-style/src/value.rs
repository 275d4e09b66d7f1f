//! Responsive values: a base value with optional per-breakpoint overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointMap;

/// A value that may vary across breakpoints.
///
/// Deserializes from a two-element array `[base, { breakpoint: override }]`
/// as [`Responsive`](ResponsiveValue::Responsive); anything else is a bare
/// [`Value`](ResponsiveValue::Value).
///
/// # Example
///
/// ```rust
/// use responsive_style::{BreakpointKey, ResponsiveValue};
///
/// let color: ResponsiveValue<String> =
///     serde_json::from_str(r#"["red", { "600": "blue" }]"#).unwrap();
///
/// assert_eq!(color.base(), "red");
/// let overrides = color.overrides().unwrap();
/// assert_eq!(overrides.get(&BreakpointKey::Width(600)).map(String::as_str), Some("blue"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// A base value and its overrides.
    Responsive(T, BreakpointMap<T>),
    /// A value without breakpoints.
    Value(T),
}

/// Responsive values keyed by property name, in authoring order.
pub type ResponsiveProperties<T> = IndexMap<String, ResponsiveValue<T>>;

impl<T> ResponsiveValue<T> {
    /// Creates a value without breakpoints.
    pub fn new(value: T) -> Self {
        ResponsiveValue::Value(value)
    }

    /// Creates a value with per-breakpoint overrides.
    pub fn responsive(base: T, overrides: BreakpointMap<T>) -> Self {
        ResponsiveValue::Responsive(base, overrides)
    }

    /// The bare value, or the base of a responsive pair.
    pub fn base(&self) -> &T {
        match self {
            ResponsiveValue::Value(value) | ResponsiveValue::Responsive(value, _) => value,
        }
    }

    /// The per-breakpoint overrides, if the value is responsive.
    pub fn overrides(&self) -> Option<&BreakpointMap<T>> {
        match self {
            ResponsiveValue::Value(_) => None,
            ResponsiveValue::Responsive(_, overrides) => Some(overrides),
        }
    }

    /// Returns `true` for a base with overrides.
    pub fn is_responsive(&self) -> bool {
        matches!(self, ResponsiveValue::Responsive(..))
    }

    /// Remaps the base and every override, keeping breakpoints and order.
    ///
    /// Useful when a component receives one responsive value and passes a
    /// derived one along:
    ///
    /// ```rust
    /// use responsive_style::{BreakpointMap, ResponsiveValue};
    ///
    /// let level = ResponsiveValue::responsive(1, BreakpointMap::new().add(800, 2));
    /// let class = level.map(|level| format!("heading-{}", level));
    ///
    /// assert_eq!(class.base(), "heading-1");
    /// ```
    pub fn map<R>(&self, mut f: impl FnMut(&T) -> R) -> ResponsiveValue<R> {
        match self {
            ResponsiveValue::Value(value) => ResponsiveValue::Value(f(value)),
            ResponsiveValue::Responsive(base, overrides) => {
                let base = f(base);
                ResponsiveValue::Responsive(base, overrides.map(f))
            }
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Value(value)
    }
}
