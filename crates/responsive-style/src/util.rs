//! Unit conversion and property partitioning helpers.

use indexmap::IndexMap;

use crate::css::CssValue;

/// Converts a number to a pixel length; text is returned untouched.
///
/// Use `Option::map(px)` for values that may be absent.
///
/// # Example
///
/// ```rust
/// use responsive_style::{px, CssValue};
///
/// assert_eq!(px(12), CssValue::from("12px"));
/// assert_eq!(px(0.5), CssValue::from("0.5px"));
/// assert_eq!(px("5em"), CssValue::from("5em"));
/// assert_eq!(None::<u32>.map(px), None);
/// ```
pub fn px<V: Into<CssValue>>(value: V) -> CssValue {
    match value.into() {
        CssValue::Number(n) => CssValue::Text(format!("{}px", n)),
        text => text,
    }
}

/// Splits a property bag into recognized properties and the rest.
///
/// The input is left untouched; both halves keep the bag's order.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use responsive_style::partition_properties;
///
/// let mut props = IndexMap::new();
/// props.insert("onClick".to_string(), "handler");
/// props.insert("height".to_string(), "5");
///
/// let (css, rest) = partition_properties(&props, &["width", "height"]);
/// assert_eq!(css.keys().collect::<Vec<_>>(), vec!["height"]);
/// assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["onClick"]);
/// ```
pub fn partition_properties<V, K>(
    properties: &IndexMap<String, V>,
    keys: &[K],
) -> (IndexMap<String, V>, IndexMap<String, V>)
where
    V: Clone,
    K: AsRef<str>,
{
    properties
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .partition(|(name, _)| keys.iter().any(|key| key.as_ref() == name.as_str()))
}
