//! Single-property resolution.

use log::{debug, trace};

use crate::breakpoint::{media_query_with_token, sort_breakpoints, ResolutionOptions};
use super::mapper::StyleMapper;
use crate::css::ResolvedStyleObject;
use crate::value::ResponsiveValue;
use crate::LOG_TARGET;

/// Resolves one responsive value into a style object.
///
/// The [mapper](StyleMapper) turns each value into declarations. The base value's
/// declarations come first, followed by one block per override in
/// [emission order](crate::sort_breakpoints), keyed by its media query.
/// Omitted declarations are stripped everywhere, and an override whose
/// declarations are all omitted produces no block. Any other value,
/// including `false`, `0` or an empty string, still produces its block.
///
/// # Example
///
/// ```rust
/// use responsive_style::{create_responsive_style, px, BreakpointMap, Declarations, ResolutionOptions, ResponsiveValue};
///
/// let top = ResponsiveValue::responsive(20, BreakpointMap::new().add(700, 30));
/// let style = create_responsive_style(
///     &top,
///     |top: &i32| Declarations::new().add("marginTop", px(*top)),
///     &ResolutionOptions::default(),
/// );
///
/// let keys: Vec<_> = style.keys().collect();
/// assert_eq!(keys, vec!["marginTop", "@media (min-width: 700px)"]);
/// ```
pub fn create_responsive_style<T, M>(
    value: &ResponsiveValue<T>,
    mapper: M,
    options: &ResolutionOptions,
) -> ResolvedStyleObject
where
    M: StyleMapper<T>,
{
    resolve(value, &mapper, options, options.key.as_deref())
}

/// Resolves with an explicit disambiguation token instead of `options.key`.
pub(crate) fn resolve<T, M>(
    value: &ResponsiveValue<T>,
    mapper: &M,
    options: &ResolutionOptions,
    token: Option<&str>,
) -> ResolvedStyleObject
where
    M: StyleMapper<T> + ?Sized,
{
    let (base, overrides) = match value {
        ResponsiveValue::Value(value) => {
            return ResolvedStyleObject::from_block(mapper.map_style(value).cleanup())
        }
        ResponsiveValue::Responsive(base, overrides) => (base, overrides),
    };

    let mut resolved = ResolvedStyleObject::from_block(mapper.map_style(base).cleanup());

    for (key, value) in sort_breakpoints(overrides, options) {
        let block = mapper.map_style(value).cleanup();
        if block.is_empty() {
            debug!(target: LOG_TARGET, "breakpoint {} has no declarations, skipping", key);
            continue;
        }

        let query = media_query_with_token(key, options, token);
        trace!(target: LOG_TARGET, "breakpoint {} -> {}", key, query);
        resolved.insert_block(query, block);
    }

    resolved
}
