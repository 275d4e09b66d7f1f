//! Style object primitives.
//!
//! This module provides the building blocks that mappers produce and the
//! resolvers assemble:
//!
//! - [`CssValue`]: A single declaration value, numeric or textual
//! - [`Declarations`]: Mapper output, where a declaration may be omitted
//! - [`DeclarationBlock`]: A cleaned set of declarations with no omissions
//! - [`ResolvedStyleObject`]: Base declarations plus one block per media query

mod declarations;
mod object;
mod value;

pub use declarations::{DeclarationBlock, Declarations};
pub use object::{ResolvedStyleObject, StyleEntry};
pub use value::CssValue;
