//! Style mappers and the per-property mapper registry.

use std::fmt;

use indexmap::IndexMap;

use crate::css::Declarations;

/// Turns one value into declarations.
///
/// Every `Fn(&T) -> Declarations` is a mapper. Types with more than one
/// natural input, such as [`SpacingFamily`](crate::SpacingFamily), implement
/// it once per input type.
///
/// ```rust
/// use responsive_style::{Declarations, StyleMapper};
///
/// let mapper = |hidden: &bool| Declarations::new().add("display", if *hidden { "none" } else { "block" });
/// assert!(mapper.map_style(&true).get("display").is_some());
/// ```
pub trait StyleMapper<T: ?Sized> {
    /// Declarations for `value`.
    fn map_style(&self, value: &T) -> Declarations;
}

/// Blanket implementation for closures and functions.
impl<T: ?Sized, F> StyleMapper<T> for F
where
    F: Fn(&T) -> Declarations,
{
    fn map_style(&self, value: &T) -> Declarations {
        self(value)
    }
}

type BoxedMapper<'a, T> = Box<dyn StyleMapper<T> + Send + Sync + 'a>;

/// Style mappers keyed by property name, in registration order.
///
/// Registration order is the order in which properties are resolved and
/// merged by [`create_responsive_styles`](crate::create_responsive_styles).
///
/// # Example
///
/// ```rust
/// use responsive_style::{Declarations, StyleMappers};
///
/// let mappers = StyleMappers::<bool>::new()
///     .add("hidden", |hidden| {
///         Declarations::new().add("display", if *hidden { "none" } else { "block" })
///     });
///
/// assert!(mappers.has("hidden"));
/// ```
pub struct StyleMappers<'a, T> {
    mappers: IndexMap<String, BoxedMapper<'a, T>>,
}

impl<'a, T> StyleMappers<'a, T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            mappers: IndexMap::new(),
        }
    }

    /// Registers a mapper for a property, returning the registry for chaining.
    ///
    /// Registering the same property twice replaces the mapper in place.
    pub fn add<F>(mut self, property: impl Into<String>, mapper: F) -> Self
    where
        F: Fn(&T) -> Declarations + Send + Sync + 'a,
    {
        self.mappers.insert(property.into(), Box::new(mapper));
        self
    }

    /// Registers any [`StyleMapper`], such as a [`SpacingFamily`](crate::SpacingFamily).
    pub fn add_mapper<M>(mut self, property: impl Into<String>, mapper: M) -> Self
    where
        M: StyleMapper<T> + Send + Sync + 'a,
    {
        self.mappers.insert(property.into(), Box::new(mapper));
        self
    }

    /// Check if a mapper is registered for `property`.
    pub fn has(&self, property: &str) -> bool {
        self.mappers.contains_key(property)
    }

    /// Number of registered mappers.
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Check if no mappers are registered.
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Property names in registration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.mappers.keys().map(String::as_str)
    }

    pub(crate) fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, &(dyn StyleMapper<T> + Send + Sync + 'a))> {
        self.mappers
            .iter()
            .map(|(property, mapper)| (property.as_str(), mapper.as_ref()))
    }
}

impl<T> Default for StyleMappers<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StyleMappers<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleMappers")
            .field("properties", &self.mappers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let mappers = StyleMappers::<u32>::new()
            .add("width", |w| Declarations::new().add("width", *w))
            .add("height", |h| Declarations::new().add("height", *h));

        let properties: Vec<_> = mappers.properties().collect();
        assert_eq!(properties, vec!["width", "height"]);
        assert_eq!(mappers.len(), 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mappers = StyleMappers::<u32>::new()
            .add("a", |_| Declarations::new().add("a", 1))
            .add("b", |_| Declarations::new().add("b", 2))
            .add("a", |_| Declarations::new().add("a", 3));

        let properties: Vec<_> = mappers.properties().collect();
        assert_eq!(properties, vec!["a", "b"]);

        let (_, mapper) = mappers.iter().next().unwrap();
        assert_eq!(mapper.map_style(&0).get("a").and_then(|v| v.as_f64()), Some(3.0));
    }

    #[test]
    fn test_fn_items_are_mappers() {
        fn width(value: &u32) -> Declarations {
            Declarations::new().add("width", *value)
        }
        assert_eq!(width.map_style(&4).get("width").and_then(|v| v.as_f64()), Some(4.0));
    }

    #[test]
    fn test_add_mapper_registers_trait_objects() {
        let mappers = StyleMappers::<Option<crate::BoxSpacing>>::new()
            .add_mapper("margin", crate::SpacingFamily::Margin)
            .add_mapper("padding", crate::SpacingFamily::Padding);

        let properties: Vec<_> = mappers.properties().collect();
        assert_eq!(properties, vec!["margin", "padding"]);

        let (_, padding) = mappers.iter().nth(1).unwrap();
        let block = padding.map_style(&Some(crate::BoxSpacing::from(3))).cleanup();
        assert_eq!(block.get("padding"), Some(&crate::CssValue::from("3px")));
    }

    #[test]
    fn test_debug_lists_properties() {
        let mappers = StyleMappers::<u32>::new().add("gap", |g| Declarations::new().add("gap", *g));
        assert_eq!(format!("{:?}", mappers), r#"StyleMappers { properties: ["gap"] }"#);
    }

    #[test]
    fn test_mappers_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleMappers<'static, String>>();
        assert_send_sync::<crate::ResolvedStyleObject>();
        assert_send_sync::<crate::ResolutionOptions>();
    }

    #[test]
    fn test_default_is_empty() {
        let mappers: StyleMappers<'_, String> = StyleMappers::default();
        assert!(mappers.is_empty());
        assert!(!mappers.has("color"));
    }
}
