//! Declaration sets produced by mappers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::CssValue;

/// The output of a style mapper: declaration names in insertion order,
/// each either set to a value or explicitly omitted.
///
/// An omitted declaration (`None`) never reaches a resolved style object;
/// [`Declarations::cleanup`] strips it. Setting a name that already exists
/// replaces its value but keeps its original position.
///
/// # Example
///
/// ```rust
/// use responsive_style::Declarations;
///
/// let declarations = Declarations::new()
///     .add("columnCount", 3)
///     .omit("columnGap");
///
/// let block = declarations.cleanup();
/// assert_eq!(block.len(), 1);
/// assert!(block.contains("columnCount"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: IndexMap<String, Option<CssValue>>,
}

impl Declarations {
    /// Creates an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated set for chaining.
    pub fn add<V: Into<CssValue>>(mut self, name: impl Into<String>, value: V) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Adds a declaration that is omitted when `value` is `None`.
    pub fn add_optional<V: Into<CssValue>>(
        mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.set(name, value.map(Into::into));
        self
    }

    /// Marks a declaration as omitted.
    pub fn omit(mut self, name: impl Into<String>) -> Self {
        self.set(name, None);
        self
    }

    /// Sets a declaration in place.
    pub fn set(&mut self, name: impl Into<String>, value: Option<CssValue>) {
        self.entries.insert(name.into(), value);
    }

    /// Returns the value of a declaration that is present and not omitted.
    pub fn get(&self, name: &str) -> Option<&CssValue> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    /// Returns `true` if the name is present, omitted or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns `true` if the name is present and marked as omitted.
    pub fn is_omitted(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(None))
    }

    /// Number of declarations, omitted ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names and values in order; omitted declarations yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&CssValue>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Removes every omitted declaration, keeping the order of the rest.
    pub fn cleanup(self) -> DeclarationBlock {
        DeclarationBlock {
            entries: self
                .entries
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
        }
    }
}

impl From<DeclarationBlock> for Declarations {
    fn from(block: DeclarationBlock) -> Self {
        Self {
            entries: block
                .entries
                .into_iter()
                .map(|(name, value)| (name, Some(value)))
                .collect(),
        }
    }
}

/// A cleaned declaration set: every entry has a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationBlock {
    entries: IndexMap<String, CssValue>,
}

impl DeclarationBlock {
    /// The value of a declaration.
    pub fn get(&self, name: &str) -> Option<&CssValue> {
        self.entries.get(name)
    }

    /// Check if a declaration is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declaration names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names and values in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for DeclarationBlock {
    type Item = (String, CssValue);
    type IntoIter = indexmap::map::IntoIter<String, CssValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
