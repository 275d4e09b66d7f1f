//! Media query generation for breakpoint keys.

use std::borrow::Cow;

use super::key::{BreakpointKey, MEDIA_QUERY_PREFIX};
use super::options::{Breakpoint, ResolutionOptions};
use crate::css::CssValue;

/// A breakpoint key after substitution through the breakpoints table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedBreakpoint<'a> {
    /// A complete media query.
    Query(&'a str),
    /// A width; `text` is how it is written in the query.
    Numeric { value: f64, text: Cow<'a, str> },
    /// Any other text, used as the media feature value.
    Feature(Cow<'a, str>),
}

impl ResolvedBreakpoint<'_> {
    /// The width, if the breakpoint is numeric.
    pub(crate) fn width(&self) -> Option<f64> {
        match self {
            ResolvedBreakpoint::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Resolves a key through `options.breakpoints`.
///
/// Literal queries are never looked up. Width keys are looked up by their
/// decimal text, so a table entry named `"500"` applies to the width 500.
pub(crate) fn resolve_breakpoint<'a>(
    key: &'a BreakpointKey,
    options: &'a ResolutionOptions,
) -> ResolvedBreakpoint<'a> {
    match key {
        BreakpointKey::Query(query) => ResolvedBreakpoint::Query(query),
        BreakpointKey::Width(width) => match options.breakpoints.get(&width.to_string()) {
            Some(breakpoint) => resolve_table_entry(breakpoint),
            None => numeric(f64::from(*width)),
        },
        BreakpointKey::Name(name) => match options.breakpoints.get(name) {
            Some(breakpoint) => resolve_table_entry(breakpoint),
            None => resolve_text(name),
        },
    }
}

fn resolve_table_entry(breakpoint: &Breakpoint) -> ResolvedBreakpoint<'_> {
    match breakpoint {
        Breakpoint::Width(width) => numeric(*width),
        Breakpoint::Query(query) => resolve_text(query),
    }
}

fn numeric<'a>(width: f64) -> ResolvedBreakpoint<'a> {
    let text = CssValue::Number(width).to_string();
    if width.is_finite() {
        ResolvedBreakpoint::Numeric {
            value: width,
            text: Cow::Owned(text),
        }
    } else {
        ResolvedBreakpoint::Feature(Cow::Owned(text))
    }
}

fn resolve_text(text: &str) -> ResolvedBreakpoint<'_> {
    if text.starts_with(MEDIA_QUERY_PREFIX) {
        return ResolvedBreakpoint::Query(text);
    }
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ResolvedBreakpoint::Numeric {
            value,
            text: Cow::Borrowed(trimmed),
        },
        _ => ResolvedBreakpoint::Feature(Cow::Borrowed(text)),
    }
}

/// Builds the media query string for a breakpoint key.
///
/// - A literal query is returned as-is.
/// - A name found in `options.breakpoints` is replaced by its table value.
/// - Numeric values gain a `px` unit.
/// - The query tests `min-width`, or `max-width` when
///   `use_max_width_media_queries` is set.
/// - A non-empty `options.key` is appended as a `/* key */` comment.
///
/// # Example
///
/// ```rust
/// use responsive_style::{media_query, BreakpointKey, ResolutionOptions};
///
/// let options = ResolutionOptions::new().breakpoint("large", 1200);
/// assert_eq!(
///     media_query(&BreakpointKey::from("large"), &options),
///     "@media (min-width: 1200px)"
/// );
///
/// let options = options.max_width(true).with_key("color");
/// assert_eq!(
///     media_query(&BreakpointKey::Width(600), &options),
///     "@media (max-width: 600px)/* color */"
/// );
/// ```
pub fn media_query(key: &BreakpointKey, options: &ResolutionOptions) -> String {
    media_query_with_token(key, options, options.key.as_deref())
}

/// Builds a media query with an explicit disambiguation token, ignoring
/// `options.key`.
pub(crate) fn media_query_with_token(
    key: &BreakpointKey,
    options: &ResolutionOptions,
    token: Option<&str>,
) -> String {
    let mut query = match resolve_breakpoint(key, options) {
        ResolvedBreakpoint::Query(query) => query.to_string(),
        ResolvedBreakpoint::Numeric { text, .. } => {
            format!("{} ({}: {}px)", MEDIA_QUERY_PREFIX, options.media_feature(), text)
        }
        ResolvedBreakpoint::Feature(feature) => {
            format!("{} ({}: {})", MEDIA_QUERY_PREFIX, options.media_feature(), feature)
        }
    };

    if let Some(token) = token.filter(|token| !token.is_empty()) {
        query.push_str(&format!("/* {} */", token));
    }
    query
}
