//! The resolved style object handed to a CSS-in-JS serializer.

use indexmap::IndexMap;
use serde::Serialize;

use super::declarations::DeclarationBlock;
use super::value::CssValue;
use crate::breakpoint::MEDIA_QUERY_PREFIX;

/// A top-level entry of a [`ResolvedStyleObject`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// A direct declaration such as `color: red`.
    Declaration(CssValue),
    /// A conditional block keyed by a media query.
    Block(DeclarationBlock),
}

impl StyleEntry {
    pub fn as_declaration(&self) -> Option<&CssValue> {
        match self {
            StyleEntry::Declaration(value) => Some(value),
            StyleEntry::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&DeclarationBlock> {
        match self {
            StyleEntry::Declaration(_) => None,
            StyleEntry::Block(block) => Some(block),
        }
    }
}

/// Base declarations followed by one declaration block per media query.
///
/// Entries keep insertion order. Merging another object replaces entries
/// with equal keys in place and appends the rest, so a later property can
/// override an earlier declaration without reordering the object.
///
/// Serializes as a plain nested map:
///
/// ```rust
/// use responsive_style::{create_responsive_style, Declarations, ResolutionOptions, ResponsiveValue};
///
/// let value = ResponsiveValue::responsive(1, [(600, 2)].into_iter().collect());
/// let style = create_responsive_style(
///     &value,
///     |count: &i32| Declarations::new().add("columnCount", *count),
///     &ResolutionOptions::default(),
/// );
///
/// assert_eq!(
///     style.to_json().unwrap().to_string(),
///     r#"{"columnCount":1,"@media (min-width: 600px)":{"columnCount":2}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyleObject {
    entries: IndexMap<String, StyleEntry>,
}

impl ResolvedStyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style object whose entries are the block's declarations.
    pub fn from_block(block: DeclarationBlock) -> Self {
        Self {
            entries: block
                .into_iter()
                .map(|(name, value)| (name, StyleEntry::Declaration(value)))
                .collect(),
        }
    }

    pub fn insert_declaration(&mut self, name: impl Into<String>, value: CssValue) {
        self.entries
            .insert(name.into(), StyleEntry::Declaration(value));
    }

    pub fn insert_block(&mut self, query: impl Into<String>, block: DeclarationBlock) {
        self.entries.insert(query.into(), StyleEntry::Block(block));
    }

    /// Merges `other` into this object.
    pub fn merge(&mut self, other: ResolvedStyleObject) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    /// Returns a top-level declaration value.
    pub fn declaration(&self, name: &str) -> Option<&CssValue> {
        self.get(name).and_then(StyleEntry::as_declaration)
    }

    /// Returns the block stored under a media query key.
    pub fn block(&self, query: &str) -> Option<&DeclarationBlock> {
        self.get(query).and_then(StyleEntry::as_block)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Media query keys of every conditional block, in order.
    pub fn media_queries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(key, entry)| {
                key.starts_with(MEDIA_QUERY_PREFIX) && matches!(entry, StyleEntry::Block(_))
            })
            .map(|(key, _)| key.as_str())
    }

    /// Entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the object to a JSON value with the same key order.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Declarations;

    fn block(name: &str, value: &str) -> DeclarationBlock {
        Declarations::new().add(name, value).cleanup()
    }

    #[test]
    fn test_from_block_creates_declarations() {
        let object = ResolvedStyleObject::from_block(block("color", "red"));
        assert_eq!(object.declaration("color"), Some(&CssValue::from("red")));
        assert_eq!(object.block("color"), None);
    }

    #[test]
    fn test_merge_overwrites_in_place() {
        let mut first = ResolvedStyleObject::new();
        first.insert_declaration("color", "red".into());
        first.insert_declaration("display", "block".into());

        let mut second = ResolvedStyleObject::new();
        second.insert_declaration("color", "blue".into());
        second.insert_block("@media (min-width: 1px)", block("color", "green"));

        first.merge(second);

        let keys: Vec<_> = first.keys().collect();
        assert_eq!(keys, vec!["color", "display", "@media (min-width: 1px)"]);
        assert_eq!(first.declaration("color"), Some(&CssValue::from("blue")));
    }

    #[test]
    fn test_media_queries_lists_blocks_only() {
        let mut object = ResolvedStyleObject::from_block(block("color", "red"));
        object.insert_block("@media (min-width: 10px)", block("color", "blue"));
        object.insert_block("@media print", block("color", "black"));

        let queries: Vec<_> = object.media_queries().collect();
        assert_eq!(queries, vec!["@media (min-width: 10px)", "@media print"]);
    }

    #[test]
    fn test_to_json_preserves_order() {
        let mut object = ResolvedStyleObject::new();
        object.insert_declaration("zIndex", CssValue::from(2));
        object.insert_declaration("alignItems", "center".into());

        assert_eq!(
            object.to_json().unwrap().to_string(),
            r#"{"zIndex":2,"alignItems":"center"}"#
        );
    }
}
