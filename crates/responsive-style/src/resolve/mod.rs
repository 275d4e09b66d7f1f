//! Responsive style resolution.
//!
//! - [`create_responsive_style`]: One responsive value through one mapper
//! - [`create_responsive_styles`]: Several properties, each with its own mapper
//! - [`create_responsive_css_properties`]: Properties mapped 1-to-1 onto declarations
//! - [`StyleMapper`]: Anything that turns a value into declarations
//! - [`StyleMappers`]: The per-property mapper registry

mod mapper;
mod multi;
mod single;

pub use mapper::{StyleMapper, StyleMappers};
pub use multi::{create_responsive_css_properties, create_responsive_styles};
pub use single::create_responsive_style;
