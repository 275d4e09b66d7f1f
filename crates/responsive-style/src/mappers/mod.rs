//! Value expanders that turn one value into several declarations.
//!
//! - [`EdgeObject`]: Per-edge shorthand (`top`, `right`, `bottom`, `left`, `x`, `y`)
//! - [`BoxSpacing`] with [`margin_mapper`] and [`padding_mapper`]
//! - [`Border`] with [`border_mapper`]

mod border;
mod box_spacing;
mod edge;

pub use border::{border_mapper, expand_border, Border};
pub use box_spacing::{expand_box_spacing, margin_mapper, padding_mapper, BoxSpacing, SpacingFamily};
pub use edge::{Edge, EdgeObject, Side};
