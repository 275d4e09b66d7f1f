//! Edge objects: per-edge shorthand values.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::css::{CssValue, Declarations};

/// A physical side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// A field of an [`EdgeObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
    /// Left and right.
    X,
    /// Top and bottom.
    Y,
}

impl Edge {
    /// The sides this edge expands to, in declaration order.
    pub fn sides(self) -> &'static [Side] {
        match self {
            Edge::Top => &[Side::Top],
            Edge::Right => &[Side::Right],
            Edge::Bottom => &[Side::Bottom],
            Edge::Left => &[Side::Left],
            Edge::X => &[Side::Left, Side::Right],
            Edge::Y => &[Side::Top, Side::Bottom],
        }
    }
}

/// Values for individual edges, in the order they were set.
///
/// Order matters: edges are expanded one after another, so a later field
/// wins for any side it shares with an earlier one. `{ y, top }` takes the
/// top from `top`, while `{ top, y }` takes it from `y`.
/// Setting an edge that is already present replaces its value in place.
///
/// # Example
///
/// ```rust
/// use responsive_style::{CssValue, Edge, EdgeObject};
///
/// let edges = EdgeObject::<CssValue>::new().y(10).top("auto");
/// let fields: Vec<_> = edges.iter().map(|(edge, _)| *edge).collect();
/// assert_eq!(fields, vec![Edge::Y, Edge::Top]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeObject<T> {
    entries: Vec<(Edge, T)>,
}

impl<T> EdgeObject<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an edge, returning the updated object for chaining.
    pub fn with(mut self, edge: Edge, value: impl Into<T>) -> Self {
        self.set(edge, value.into());
        self
    }

    pub fn top(self, value: impl Into<T>) -> Self {
        self.with(Edge::Top, value)
    }

    pub fn right(self, value: impl Into<T>) -> Self {
        self.with(Edge::Right, value)
    }

    pub fn bottom(self, value: impl Into<T>) -> Self {
        self.with(Edge::Bottom, value)
    }

    pub fn left(self, value: impl Into<T>) -> Self {
        self.with(Edge::Left, value)
    }

    pub fn x(self, value: impl Into<T>) -> Self {
        self.with(Edge::X, value)
    }

    pub fn y(self, value: impl Into<T>) -> Self {
        self.with(Edge::Y, value)
    }

    /// Sets an edge in place.
    pub fn set(&mut self, edge: Edge, value: T) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == edge) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((edge, value)),
        }
    }

    pub fn get(&self, edge: Edge) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == edge)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Edge, T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expands each edge onto its sides.
    ///
    /// `property` names the declaration for a side and `value` converts the
    /// edge value into a declaration value.
    pub(crate) fn expand(
        &self,
        property: impl Fn(Side) -> &'static str,
        value: impl Fn(&T) -> CssValue,
    ) -> Declarations {
        let mut declarations = Declarations::new();
        for (edge, raw) in &self.entries {
            let converted = value(raw);
            for side in edge.sides() {
                declarations.set(property(*side), Some(converted.clone()));
            }
        }
        declarations
    }
}

impl<T> Default for EdgeObject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for EdgeObject<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (edge, value) in &self.entries {
            map.serialize_entry(edge, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for EdgeObject<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EdgeVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EdgeVisitor<T> {
            type Value = EdgeObject<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of top, right, bottom, left, x or y")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut edges = EdgeObject::new();
                while let Some((edge, value)) = map.next_entry::<Edge, T>()? {
                    edges.set(edge, value);
                }
                Ok(edges)
            }
        }

        deserializer.deserialize_map(EdgeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_sides() {
        assert_eq!(Edge::X.sides(), &[Side::Left, Side::Right]);
        assert_eq!(Edge::Y.sides(), &[Side::Top, Side::Bottom]);
        assert_eq!(Edge::Left.sides(), &[Side::Left]);
    }

    #[test]
    fn test_set_existing_edge_keeps_position() {
        let edges = EdgeObject::<String>::new().top("a").x("b").top("c");
        let entries: Vec<_> = edges.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![(Edge::Top, "c".to_string()), (Edge::X, "b".to_string())]
        );
        assert_eq!(edges.get(Edge::Top).map(String::as_str), Some("c"));
        assert_eq!(edges.get(Edge::Y), None);
    }

    #[test]
    fn test_deserialize_preserves_field_order() {
        let edges: EdgeObject<u32> = serde_json::from_str(r#"{"y": 1, "left": 2, "top": 3}"#).unwrap();
        let fields: Vec<_> = edges.iter().map(|(edge, _)| *edge).collect();
        assert_eq!(fields, vec![Edge::Y, Edge::Left, Edge::Top]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_edge() {
        let result: Result<EdgeObject<u32>, _> = serde_json::from_str(r#"{"middle": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_in_order() {
        let edges = EdgeObject::<u32>::new().x(4u32).top(1u32);
        assert_eq!(serde_json::to_string(&edges).unwrap(), r#"{"x":4,"top":1}"#);
    }
}
