//! # Responsive Style - per-breakpoint values as CSS-in-JS style objects
//!
//! `responsive-style` resolves a value that varies across viewport
//! breakpoints into a flat style object: base declarations followed by one
//! nested block per media query, ready for a CSS-in-JS serializer.
//!
//! ## Core Concepts
//!
//! - [`ResponsiveValue`]: A bare value, or a base value with a [`BreakpointMap`] of overrides
//! - Mappers: Functions turning one value into [`Declarations`]
//! - [`ResolutionOptions`]: Disambiguation key, `min-width`/`max-width`, named [`Breakpoints`]
//! - [`ResolvedStyleObject`]: The merged result
//!
//! ## Quick Start
//!
//! ```rust
//! use responsive_style::{create_responsive_style, px, BreakpointMap, Declarations, ResolutionOptions, ResponsiveValue};
//!
//! let gap = ResponsiveValue::responsive(
//!     8,
//!     BreakpointMap::new().add("large", 24).add(600, 16),
//! );
//! let options = ResolutionOptions::new().breakpoint("large", 1200);
//!
//! let style = create_responsive_style(&gap, |gap: &i32| Declarations::new().add("gap", px(*gap)), &options);
//!
//! assert_eq!(
//!     serde_json::to_string(&style).unwrap(),
//!     r#"{"gap":"8px","@media (min-width: 600px)":{"gap":"16px"},"@media (min-width: 1200px)":{"gap":"24px"}}"#
//! );
//! ```
//!
//! ## Several Properties
//!
//! [`create_responsive_styles`] resolves one value per property through a
//! [`StyleMappers`] registry and merges the results. Each property's media
//! queries carry a `/* property */` comment so that two properties sharing a
//! breakpoint keep separate blocks. [`create_responsive_css_properties`] is the
//! same with every property mapped onto a declaration of its own name.
//!
//! ## Expanders
//!
//! [`margin_mapper`], [`padding_mapper`] and [`border_mapper`] expand a
//! single value or an [`EdgeObject`] (`top`, `right`, `bottom`, `left`,
//! `x`, `y`) into longhand declarations.
//!
//! ## Ordering
//!
//! Literal media queries come first in authoring order, then numeric
//! breakpoints ascending (`min-width`) or descending (`max-width`). See
//! [`sort_breakpoints`].

pub mod breakpoint;
pub mod css;
mod error;
pub mod mappers;
mod resolve;
mod util;
mod value;

pub use breakpoint::{
    compare_breakpoints, media_query, sort_breakpoints, Breakpoint, BreakpointKey, BreakpointMap,
    Breakpoints, ResolutionOptions, MEDIA_QUERY_PREFIX,
};
pub use css::{CssValue, DeclarationBlock, Declarations, ResolvedStyleObject, StyleEntry};
pub use error::ConfigError;
pub use mappers::{
    border_mapper, expand_border, expand_box_spacing, margin_mapper, padding_mapper, Border,
    BoxSpacing, Edge, EdgeObject, Side, SpacingFamily,
};
pub use resolve::{
    create_responsive_css_properties, create_responsive_style, create_responsive_styles,
    StyleMapper, StyleMappers,
};
pub use util::{partition_properties, px};
pub use value::{ResponsiveProperties, ResponsiveValue};

/// Log target for resolution diagnostics.
pub(crate) const LOG_TARGET: &str = "responsive_style";
