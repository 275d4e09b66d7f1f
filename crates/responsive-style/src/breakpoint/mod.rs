//! Breakpoints and their media queries.
//!
//! This module provides:
//!
//! - [`BreakpointKey`]: How an override names its breakpoint
//! - [`BreakpointMap`]: Ordered overrides keyed by breakpoint
//! - [`Breakpoint`] and [`Breakpoints`]: A table of named breakpoints
//! - [`ResolutionOptions`]: Disambiguation key, query direction and breakpoint table
//! - [`media_query`]: Turns a breakpoint key into a media query string
//! - [`compare_breakpoints`] and [`sort_breakpoints`]: Emission order of overrides

mod key;
mod options;
mod order;
mod query;

pub use key::{BreakpointKey, BreakpointMap, MEDIA_QUERY_PREFIX};
pub use options::{Breakpoint, Breakpoints, ResolutionOptions};
pub use order::{compare_breakpoints, sort_breakpoints};
pub use query::media_query;

pub(crate) use query::media_query_with_token;
