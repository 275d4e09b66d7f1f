//! Resolution options and named breakpoint tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The value of a named breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakpoint {
    /// A viewport width in pixels, possibly fractional.
    Width(f64),
    /// Either a complete media query (starting with `@media`) or a feature
    /// value such as `"48em"`.
    Query(String),
}

impl From<f64> for Breakpoint {
    fn from(width: f64) -> Self {
        Breakpoint::Width(width)
    }
}

impl From<u32> for Breakpoint {
    fn from(width: u32) -> Self {
        Breakpoint::Width(f64::from(width))
    }
}

impl From<i32> for Breakpoint {
    fn from(width: i32) -> Self {
        Breakpoint::Width(f64::from(width))
    }
}

impl From<&str> for Breakpoint {
    fn from(query: &str) -> Self {
        Breakpoint::Query(query.to_string())
    }
}

impl From<String> for Breakpoint {
    fn from(query: String) -> Self {
        Breakpoint::Query(query)
    }
}

/// A table of named breakpoints.
///
/// Loading a table with a repeated name keeps the last value at the
/// position of the first.
///
/// # Example
///
/// ```rust
/// use responsive_style::{Breakpoint, Breakpoints};
///
/// let breakpoints = Breakpoints::from_yaml("small: 800\nlarge: 1200\nprint: '@media print'\n").unwrap();
/// assert_eq!(breakpoints.get("large"), Some(&Breakpoint::Width(1200.0)));
/// assert_eq!(breakpoints.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints {
    entries: IndexMap<String, Breakpoint>,
}

impl Breakpoints {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named breakpoint, returning the updated table for chaining.
    pub fn add(mut self, name: impl Into<String>, breakpoint: impl Into<Breakpoint>) -> Self {
        self.entries.insert(name.into(), breakpoint.into());
        self
    }

    /// Looks up a breakpoint by name.
    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.get(name)
    }

    /// Number of named breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names and values in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Breakpoint)> {
        self.entries.iter().map(|(name, bp)| (name.as_str(), bp))
    }

    /// Parses a table from a YAML mapping of name to width or query.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a table from a JSON object of name to width or query.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Options controlling how breakpoints become media queries.
///
/// | Field | Default | Effect |
/// |-------|---------|--------|
/// | `key` | `None` | Appends `/* key */` to every generated query |
/// | `use_max_width_media_queries` | `false` | `max-width` queries in descending order instead of `min-width` ascending |
/// | `breakpoints` | empty | Named breakpoints substituted before building a query |
///
/// Options deserialize from camelCase fields, all optional:
///
/// ```rust
/// use responsive_style::ResolutionOptions;
///
/// let options = ResolutionOptions::from_json(
///     r#"{ "useMaxWidthMediaQueries": true, "breakpoints": { "large": 500 } }"#,
/// ).unwrap();
///
/// assert!(options.use_max_width_media_queries);
/// assert_eq!(options.key, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionOptions {
    /// Disambiguation token appended to generated media queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Emit `max-width` queries, widest first.
    pub use_max_width_media_queries: bool,
    /// Named breakpoints.
    pub breakpoints: Breakpoints,
}

impl ResolutionOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the disambiguation token.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Switches between `min-width` (false) and `max-width` (true) queries.
    pub fn max_width(mut self, enabled: bool) -> Self {
        self.use_max_width_media_queries = enabled;
        self
    }

    /// Adds a named breakpoint.
    pub fn breakpoint(mut self, name: impl Into<String>, breakpoint: impl Into<Breakpoint>) -> Self {
        self.breakpoints = self.breakpoints.add(name, breakpoint);
        self
    }

    /// Replaces the breakpoint table.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// The media feature generated queries test against.
    pub fn media_feature(&self) -> &'static str {
        if self.use_max_width_media_queries {
            "max-width"
        } else {
            "min-width"
        }
    }

    /// Parses options from a JSON object with camelCase fields.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses options from a YAML mapping with camelCase fields.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }
}
