//! Emission order of breakpoint overrides.
//!
//! Overrides are emitted in this order:
//!
//! 1. Every entry whose resolved key is not numeric (literal media queries,
//!    feature values like `48em`), in authoring order
//! 2. Numeric entries by width, ascending for `min-width` queries and
//!    descending for `max-width` queries
//!
//! Entries of equal width keep their authoring order. Non-numeric entries are
//! never ranked against each other, which keeps the comparator a total
//! preorder and the result independent of the sort algorithm.

use std::cmp::Ordering;

use super::key::{BreakpointKey, BreakpointMap};
use super::options::ResolutionOptions;
use super::query::resolve_breakpoint;

/// Compares two breakpoint keys for emission order.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use responsive_style::{compare_breakpoints, BreakpointKey, ResolutionOptions};
///
/// let options = ResolutionOptions::new().breakpoint("small", 800);
/// let small = BreakpointKey::from("small");
/// let wide = BreakpointKey::Width(1000);
/// let print = BreakpointKey::from("@media print");
///
/// assert_eq!(compare_breakpoints(&small, &wide, &options), Ordering::Less);
/// assert_eq!(compare_breakpoints(&wide, &print, &options), Ordering::Greater);
/// ```
pub fn compare_breakpoints(
    a: &BreakpointKey,
    b: &BreakpointKey,
    options: &ResolutionOptions,
) -> Ordering {
    let left = resolve_breakpoint(a, options).width();
    let right = resolve_breakpoint(b, options).width();

    match (left, right) {
        (Some(left), Some(right)) => {
            let ordering = left.total_cmp(&right);
            if options.use_max_width_media_queries {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the overrides of `map` in emission order.
pub fn sort_breakpoints<'a, T>(
    map: &'a BreakpointMap<T>,
    options: &ResolutionOptions,
) -> Vec<(&'a BreakpointKey, &'a T)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_breakpoints(a, b, options));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERAL: &str = "@media (min-width: 150px) and (max-width: 250px)";

    fn sorted_keys<T>(map: &BreakpointMap<T>, options: &ResolutionOptions) -> Vec<String> {
        sort_breakpoints(map, options)
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect()
    }

    fn mixed() -> BreakpointMap<u32> {
        BreakpointMap::new()
            .add(200, 2)
            .add(100, 1)
            .add(LITERAL, 5)
            .add(300, 3)
    }

    #[test]
    fn test_literal_first_then_ascending() {
        let keys = sorted_keys(&mixed(), &ResolutionOptions::default());
        assert_eq!(keys, vec![LITERAL, "100", "200", "300"]);
    }

    #[test]
    fn test_literal_first_then_descending_for_max_width() {
        let keys = sorted_keys(&mixed(), &ResolutionOptions::new().max_width(true));
        assert_eq!(keys, vec![LITERAL, "300", "200", "100"]);
    }

    #[test]
    fn test_named_breakpoints_sort_by_value() {
        let options = ResolutionOptions::new()
            .breakpoint("large", 1200)
            .breakpoint("small", 800);
        let map = BreakpointMap::new()
            .add(700, "a")
            .add(1000, "b")
            .add("large", "c")
            .add("small", "d");

        let keys = sorted_keys(&map, &options);
        assert_eq!(keys, vec!["700", "small", "1000", "large"]);
    }

    #[test]
    fn test_literals_keep_authoring_order() {
        let map = BreakpointMap::new()
            .add("@media print", 1)
            .add(400, 2)
            .add("@media (orientation: landscape)", 3)
            .add("48em", 4);

        let keys = sorted_keys(&map, &ResolutionOptions::default());
        assert_eq!(
            keys,
            vec![
                "@media print",
                "@media (orientation: landscape)",
                "48em",
                "400",
            ]
        );
    }

    #[test]
    fn test_equal_widths_keep_authoring_order() {
        let options = ResolutionOptions::new().breakpoint("tablet", 768);
        let map = BreakpointMap::new().add("tablet", 1).add(768, 2).add(100, 3);

        let keys = sorted_keys(&map, &options);
        assert_eq!(keys, vec!["100", "tablet", "768"]);
    }

    #[test]
    fn test_comparator_is_antisymmetric() {
        let options = ResolutionOptions::default();
        let literal = BreakpointKey::from(LITERAL);
        let width = BreakpointKey::Width(10);

        assert_eq!(compare_breakpoints(&literal, &width, &options), Ordering::Less);
        assert_eq!(compare_breakpoints(&width, &literal, &options), Ordering::Greater);
        assert_eq!(
            compare_breakpoints(&literal, &BreakpointKey::from("@media print"), &options),
            Ordering::Equal
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn numeric_entries_are_monotonic(
            widths in prop::collection::vec(0u32..5000, 0..12),
            use_max_width in prop::bool::ANY,
        ) {
            let options = ResolutionOptions::new().max_width(use_max_width);
            let map: BreakpointMap<()> = widths.iter().map(|w| (*w, ())).collect();

            let sorted: Vec<u32> = sort_breakpoints(&map, &options)
                .into_iter()
                .map(|(key, _)| match key {
                    BreakpointKey::Width(width) => *width,
                    other => panic!("unexpected key {}", other),
                })
                .collect();

            for pair in sorted.windows(2) {
                if use_max_width {
                    prop_assert!(pair[0] >= pair[1]);
                } else {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }
        }

        #[test]
        fn literals_always_precede_widths(
            widths in prop::collection::vec(0u32..5000, 0..8),
            literal_positions in prop::collection::vec(0usize..8, 0..4),
        ) {
            let mut map: BreakpointMap<()> = BreakpointMap::new();
            let mut literal_index = 0;
            for (i, width) in widths.iter().enumerate() {
                if literal_positions.contains(&i) {
                    map.insert(format!("@media (hover: hover) and (min-resolution: {}dpi)", literal_index), ());
                    literal_index += 1;
                }
                map.insert(*width, ());
            }

            let sorted = sort_breakpoints(&map, &ResolutionOptions::default());
            let first_width = sorted.iter().position(|(key, _)| !key.is_query());
            if let Some(first_width) = first_width {
                prop_assert!(sorted[first_width..].iter().all(|(key, _)| !key.is_query()));
            }
        }
    }
}
