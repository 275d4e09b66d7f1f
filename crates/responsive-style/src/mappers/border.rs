//! Border shorthand expansion.

use serde::{Deserialize, Serialize};

use super::edge::{EdgeObject, Side};
use crate::css::{CssValue, Declarations};

const SHORTHAND: &str = "border";

/// A border value: one shorthand for every side, or per-edge shorthands.
///
/// Values are used as written, e.g. `"1px solid red"`; no unit conversion
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Border {
    Single(String),
    Edges(EdgeObject<String>),
}

impl Border {
    /// Per-edge borders.
    pub fn edges(edges: EdgeObject<String>) -> Self {
        Border::Edges(edges)
    }
}

impl From<&str> for Border {
    fn from(value: &str) -> Self {
        Border::Single(value.to_string())
    }
}

impl From<String> for Border {
    fn from(value: String) -> Self {
        Border::Single(value)
    }
}

impl From<EdgeObject<String>> for Border {
    fn from(edges: EdgeObject<String>) -> Self {
        Border::Edges(edges)
    }
}

fn longhand(side: Side) -> &'static str {
    match side {
        Side::Top => "borderTop",
        Side::Right => "borderRight",
        Side::Bottom => "borderBottom",
        Side::Left => "borderLeft",
    }
}

/// Expands a border value into `border` or `border{Side}` declarations.
///
/// # Example
///
/// ```rust
/// use responsive_style::{expand_border, Border, CssValue, EdgeObject};
///
/// let value = Border::edges(EdgeObject::<String>::new().x("1px solid red"));
/// let block = expand_border(Some(&value)).cleanup();
///
/// assert_eq!(block.get("borderLeft"), Some(&CssValue::from("1px solid red")));
/// assert_eq!(block.get("borderRight"), Some(&CssValue::from("1px solid red")));
/// ```
pub fn expand_border(value: Option<&Border>) -> Declarations {
    match value {
        None => Declarations::new().omit(SHORTHAND),
        Some(Border::Single(value)) => Declarations::new().add(SHORTHAND, value.as_str()),
        Some(Border::Edges(edges)) => {
            edges.expand(longhand, |value| CssValue::Text(value.clone()))
        }
    }
}

/// Style mapper for border values.
pub fn border_mapper(value: &Border) -> Declarations {
    expand_border(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_shorthand() {
        let declarations = border_mapper(&Border::from("2px dashed blue"));
        assert_eq!(
            declarations.get("border"),
            Some(&CssValue::from("2px dashed blue"))
        );
        assert_eq!(declarations.len(), 1);
    }

    #[test]
    fn test_absent_border_is_omitted() {
        assert!(expand_border(None).cleanup().is_empty());
    }

    #[test]
    fn test_x_without_unit_conversion() {
        let value = Border::edges(EdgeObject::<String>::new().x("1px solid red"));
        let block = border_mapper(&value).cleanup();
        let names: Vec<_> = block.names().collect();
        assert_eq!(names, vec!["borderLeft", "borderRight"]);
        assert_eq!(block.get("borderLeft"), Some(&CssValue::from("1px solid red")));
    }

    #[test]
    fn test_numeric_looking_text_is_untouched() {
        let value = Border::edges(EdgeObject::<String>::new().top("0"));
        let block = border_mapper(&value).cleanup();
        assert_eq!(block.get("borderTop"), Some(&CssValue::from("0")));
    }

    #[test]
    fn test_y_then_bottom() {
        let value = Border::edges(
            EdgeObject::<String>::new()
                .y("1px solid black")
                .bottom("none"),
        );
        let block = border_mapper(&value).cleanup();
        assert_eq!(block.get("borderTop"), Some(&CssValue::from("1px solid black")));
        assert_eq!(block.get("borderBottom"), Some(&CssValue::from("none")));
    }

    #[test]
    fn test_deserialize_edges() {
        let value: Border = serde_yaml::from_str("left: 1px solid red\nright: none\n").unwrap();
        let block = border_mapper(&value).cleanup();
        let names: Vec<_> = block.names().collect();
        assert_eq!(names, vec!["borderLeft", "borderRight"]);
    }
}
