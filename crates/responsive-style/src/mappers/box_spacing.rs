//! Margin and padding expansion.

use serde::{Deserialize, Serialize};

use super::edge::{EdgeObject, Side};
use crate::css::{CssValue, Declarations};
use crate::resolve::StyleMapper;
use crate::util::px;

/// A margin or padding value: one value for every side, or per-edge values.
///
/// Numbers are pixel widths; text such as `"1em"` or `"auto"` is used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSpacing {
    Single(CssValue),
    Edges(EdgeObject<CssValue>),
}

impl BoxSpacing {
    /// Per-edge spacing.
    pub fn edges(edges: EdgeObject<CssValue>) -> Self {
        BoxSpacing::Edges(edges)
    }
}

impl From<CssValue> for BoxSpacing {
    fn from(value: CssValue) -> Self {
        BoxSpacing::Single(value)
    }
}

impl From<i32> for BoxSpacing {
    fn from(value: i32) -> Self {
        BoxSpacing::Single(value.into())
    }
}

impl From<f64> for BoxSpacing {
    fn from(value: f64) -> Self {
        BoxSpacing::Single(value.into())
    }
}

impl From<&str> for BoxSpacing {
    fn from(value: &str) -> Self {
        BoxSpacing::Single(value.into())
    }
}

impl From<EdgeObject<CssValue>> for BoxSpacing {
    fn from(edges: EdgeObject<CssValue>) -> Self {
        BoxSpacing::Edges(edges)
    }
}

/// The property family a [`BoxSpacing`] expands into.
///
/// A family is itself a [`StyleMapper`] for `BoxSpacing` and for
/// `Option<BoxSpacing>`, so an optional responsive value resolves directly:
///
/// ```rust
/// use responsive_style::{create_responsive_style, BoxSpacing, BreakpointMap, ResolutionOptions, ResponsiveValue, SpacingFamily};
///
/// let value = ResponsiveValue::responsive(None, BreakpointMap::new().add(600, Some(BoxSpacing::from(8))));
/// let style = create_responsive_style(&value, SpacingFamily::Padding, &ResolutionOptions::default());
///
/// let keys: Vec<_> = style.keys().collect();
/// assert_eq!(keys, vec!["@media (min-width: 600px)"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingFamily {
    Margin,
    Padding,
}

impl SpacingFamily {
    /// The shorthand declaration name.
    pub fn shorthand(self) -> &'static str {
        match self {
            SpacingFamily::Margin => "margin",
            SpacingFamily::Padding => "padding",
        }
    }

    /// The declaration name for one side.
    pub fn longhand(self, side: Side) -> &'static str {
        match (self, side) {
            (SpacingFamily::Margin, Side::Top) => "marginTop",
            (SpacingFamily::Margin, Side::Right) => "marginRight",
            (SpacingFamily::Margin, Side::Bottom) => "marginBottom",
            (SpacingFamily::Margin, Side::Left) => "marginLeft",
            (SpacingFamily::Padding, Side::Top) => "paddingTop",
            (SpacingFamily::Padding, Side::Right) => "paddingRight",
            (SpacingFamily::Padding, Side::Bottom) => "paddingBottom",
            (SpacingFamily::Padding, Side::Left) => "paddingLeft",
        }
    }
}

/// Expands a spacing value into declarations of `family`.
///
/// - No value gives an omitted shorthand, which cleans up to nothing.
/// - A single value gives the shorthand, with numbers converted to pixels.
/// - Edges give one longhand per side, with numbers converted to pixels.
///
/// # Example
///
/// ```rust
/// use responsive_style::{expand_box_spacing, BoxSpacing, CssValue, EdgeObject, SpacingFamily};
///
/// let value = BoxSpacing::edges(EdgeObject::<CssValue>::new().top(20).bottom(40));
/// let block = expand_box_spacing(SpacingFamily::Margin, Some(&value)).cleanup();
///
/// assert_eq!(block.get("marginTop"), Some(&CssValue::from("20px")));
/// assert_eq!(block.get("marginBottom"), Some(&CssValue::from("40px")));
/// ```
pub fn expand_box_spacing(family: SpacingFamily, value: Option<&BoxSpacing>) -> Declarations {
    match value {
        None => Declarations::new().omit(family.shorthand()),
        Some(BoxSpacing::Single(value)) => {
            Declarations::new().add(family.shorthand(), px(value.clone()))
        }
        Some(BoxSpacing::Edges(edges)) => {
            edges.expand(|side| family.longhand(side), |value| px(value.clone()))
        }
    }
}

impl StyleMapper<BoxSpacing> for SpacingFamily {
    fn map_style(&self, value: &BoxSpacing) -> Declarations {
        expand_box_spacing(*self, Some(value))
    }
}

impl StyleMapper<Option<BoxSpacing>> for SpacingFamily {
    fn map_style(&self, value: &Option<BoxSpacing>) -> Declarations {
        expand_box_spacing(*self, value.as_ref())
    }
}

/// Style mapper for `margin` values.
pub fn margin_mapper(value: &BoxSpacing) -> Declarations {
    expand_box_spacing(SpacingFamily::Margin, Some(value))
}

/// Style mapper for `padding` values.
pub fn padding_mapper(value: &BoxSpacing) -> Declarations {
    expand_box_spacing(SpacingFamily::Padding, Some(value))
}
