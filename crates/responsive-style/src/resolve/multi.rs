//! Multi-property resolution.
//!
//! Each property is resolved on its own with the property name as the
//! disambiguation token, then merged into one object in property order.
//! Two properties sharing a breakpoint therefore get separate blocks,
//! `@media (min-width: 600px)/* color */` and
//! `@media (min-width: 600px)/* backgroundColor */`, instead of the second
//! overwriting the first.

use indexmap::IndexMap;
use log::debug;

use super::mapper::StyleMappers;
use super::single::resolve;
use crate::breakpoint::ResolutionOptions;
use crate::css::{CssValue, Declarations, ResolvedStyleObject};
use crate::value::ResponsiveValue;
use crate::LOG_TARGET;

/// Resolves several responsive properties, each through its own mapper.
///
/// Properties are resolved in the registration order of `mappers`. A
/// property without a value contributes nothing, and values without a
/// registered mapper are ignored. Any `options.key` is replaced by the
/// property name.
///
/// # Example
///
/// ```rust
/// use responsive_style::{create_responsive_styles, Declarations, ResolutionOptions, ResponsiveProperties, StyleMappers};
/// use serde_json::{json, Value};
///
/// let values: ResponsiveProperties<Value> = serde_json::from_value(json!({
///     "color": "red",
///     "backgroundColor": ["blue", { "large": "orange" }],
/// })).unwrap();
///
/// let mappers = StyleMappers::<Value>::new()
///     .add("color", |v| Declarations::new().add_optional("color", v.as_str()))
///     .add("backgroundColor", |v| Declarations::new().add_optional("backgroundColor", v.as_str()));
///
/// let style = create_responsive_styles(
///     &mappers,
///     &values,
///     &ResolutionOptions::new().breakpoint("large", 500),
/// );
///
/// assert!(style.contains_key("@media (min-width: 500px)/* backgroundColor */"));
/// ```
pub fn create_responsive_styles<T>(
    mappers: &StyleMappers<'_, T>,
    values: &IndexMap<String, ResponsiveValue<T>>,
    options: &ResolutionOptions,
) -> ResolvedStyleObject {
    let mut resolved = ResolvedStyleObject::new();

    for (property, mapper) in mappers.iter() {
        let Some(value) = values.get(property) else {
            debug!(target: LOG_TARGET, "property {} has no value, skipping", property);
            continue;
        };
        debug!(target: LOG_TARGET, "resolving property {}", property);
        resolved.merge(resolve(value, mapper, options, Some(property)));
    }

    resolved
}

/// Resolves properties that map 1-to-1 onto declarations of the same name.
///
/// Each value becomes `{ property: value }`; a value that converts to `None`
/// is omitted.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use responsive_style::{create_responsive_css_properties, BreakpointMap, CssValue, ResolutionOptions, ResponsiveValue};
///
/// let mut properties: IndexMap<String, ResponsiveValue<CssValue>> = IndexMap::new();
/// properties.insert("overflow".into(), ResponsiveValue::new("hidden".into()));
/// properties.insert(
///     "color".into(),
///     ResponsiveValue::responsive("red".into(), BreakpointMap::new().add(600, "blue".into())),
/// );
///
/// let style = create_responsive_css_properties(&properties, &ResolutionOptions::default());
/// let keys: Vec<_> = style.keys().collect();
/// assert_eq!(keys, vec!["overflow", "color", "@media (min-width: 600px)/* color */"]);
/// ```
pub fn create_responsive_css_properties<V>(
    properties: &IndexMap<String, ResponsiveValue<V>>,
    options: &ResolutionOptions,
) -> ResolvedStyleObject
where
    V: Clone + Into<Option<CssValue>>,
{
    let mut resolved = ResolvedStyleObject::new();

    for (property, value) in properties {
        let mapper = |value: &V| {
            let value: Option<CssValue> = value.clone().into();
            Declarations::new().add_optional(property.as_str(), value)
        };
        resolved.merge(resolve(value, &mapper, options, Some(property.as_str())));
    }

    resolved
}
