//! Breakpoint keys and per-breakpoint override maps.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::css::CssValue;

/// Prefix that marks a string as an already-complete media query.
pub const MEDIA_QUERY_PREFIX: &str = "@media";

/// The key of a single override in a [`BreakpointMap`].
///
/// Strings are classified on conversion: anything starting with
/// [`MEDIA_QUERY_PREFIX`] is a literal [`Query`](BreakpointKey::Query), an
/// unsigned integer in canonical form is a [`Width`](BreakpointKey::Width),
/// and everything else is a [`Name`](BreakpointKey::Name) looked up in the
/// breakpoints table. `"0500"` and `"+5"` stay names, so the text a key was
/// written with is the text it is looked up by.
///
/// ```rust
/// use responsive_style::BreakpointKey;
///
/// assert_eq!(BreakpointKey::from("768"), BreakpointKey::Width(768));
/// assert_eq!(BreakpointKey::from("large"), BreakpointKey::Name("large".into()));
/// assert!(BreakpointKey::from("@media print").is_query());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BreakpointKey {
    /// A viewport width in pixels.
    Width(u32),
    /// A named breakpoint, or any other text used as the query feature value.
    Name(String),
    /// A literal media query, used verbatim.
    Query(String),
}

impl BreakpointKey {
    /// Classifies a string key.
    pub fn parse(key: &str) -> Self {
        if key.starts_with(MEDIA_QUERY_PREFIX) {
            BreakpointKey::Query(key.to_string())
        } else if let Some(width) = key.parse::<u32>().ok().filter(|w| w.to_string() == key) {
            BreakpointKey::Width(width)
        } else {
            BreakpointKey::Name(key.to_string())
        }
    }

    /// Returns `true` for a literal media query.
    pub fn is_query(&self) -> bool {
        matches!(self, BreakpointKey::Query(_))
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakpointKey::Width(width) => write!(f, "{}", width),
            BreakpointKey::Name(name) => f.write_str(name),
            BreakpointKey::Query(query) => f.write_str(query),
        }
    }
}

impl From<u32> for BreakpointKey {
    fn from(width: u32) -> Self {
        BreakpointKey::Width(width)
    }
}

impl From<i32> for BreakpointKey {
    /// Non-negative integers are widths; negative ones are kept as text.
    fn from(width: i32) -> Self {
        match u32::try_from(width) {
            Ok(width) => BreakpointKey::Width(width),
            Err(_) => BreakpointKey::Name(width.to_string()),
        }
    }
}

impl From<&str> for BreakpointKey {
    fn from(key: &str) -> Self {
        BreakpointKey::parse(key)
    }
}

impl From<String> for BreakpointKey {
    fn from(key: String) -> Self {
        BreakpointKey::parse(&key)
    }
}

impl Serialize for BreakpointKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BreakpointKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = BreakpointKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pixel width, a breakpoint name or a media query")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                u32::try_from(value)
                    .map(BreakpointKey::Width)
                    .map_err(|_| E::custom(format!("breakpoint width {} is too large", value)))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                match u64::try_from(value) {
                    Ok(value) => self.visit_u64(value),
                    Err(_) => Ok(BreakpointKey::Name(value.to_string())),
                }
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(BreakpointKey::parse(&CssValue::Number(value).to_string()))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(BreakpointKey::parse(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Override values keyed by breakpoint, in authoring order.
///
/// Authoring order only matters for entries the comparator cannot rank by
/// width; see [`sort_breakpoints`](crate::sort_breakpoints). A breakpoint
/// without an override is simply left out of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointMap<T> {
    entries: IndexMap<BreakpointKey, T>,
}

impl<T> BreakpointMap<T> {
    /// Creates a map with no overrides.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds an override, returning the updated map for chaining.
    pub fn add(mut self, key: impl Into<BreakpointKey>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an override; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<BreakpointKey>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    /// The override for `key`, if any.
    pub fn get(&self, key: &BreakpointKey) -> Option<&T> {
        self.entries.get(key)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in authoring order.
    pub fn keys(&self) -> impl Iterator<Item = &BreakpointKey> {
        self.entries.keys()
    }

    /// Keys and values in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&BreakpointKey, &T)> {
        self.entries.iter()
    }

    /// Maps every override value, keeping keys and order.
    pub fn map<R>(&self, mut f: impl FnMut(&T) -> R) -> BreakpointMap<R> {
        BreakpointMap {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
        }
    }
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<BreakpointKey>, T> FromIterator<(K, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = BreakpointMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
