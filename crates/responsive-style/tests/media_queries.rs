use responsive_style::{
    create_responsive_style, BreakpointMap, Declarations, ResolutionOptions, ResponsiveValue,
};

const LITERAL: &str = "@media (min-width: 150px) and (max-width: 250px)";

fn column_counts() -> ResponsiveValue<u32> {
    ResponsiveValue::responsive(
        0,
        BreakpointMap::new()
            .add(200, 2)
            .add(100, 1)
            .add(LITERAL, 5)
            .add(300, 3),
    )
}

fn column_count(count: &u32) -> Declarations {
    Declarations::new().add("columnCount", *count)
}

#[test]
fn test_ascending_with_declarations_and_custom_queries_first() {
    let style = create_responsive_style(&column_counts(), column_count, &ResolutionOptions::default());

    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        vec![
            "columnCount",
            LITERAL,
            "@media (min-width: 100px)",
            "@media (min-width: 200px)",
            "@media (min-width: 300px)",
        ]
    );
}

#[test]
fn test_max_width_descending() {
    let style = create_responsive_style(
        &column_counts(),
        column_count,
        &ResolutionOptions::new().max_width(true),
    );

    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        vec![
            "columnCount",
            LITERAL,
            "@media (max-width: 300px)",
            "@media (max-width: 200px)",
            "@media (max-width: 100px)",
        ]
    );
}

#[test]
fn test_options_loaded_from_yaml() {
    let options = ResolutionOptions::from_yaml(
        "useMaxWidthMediaQueries: true\nbreakpoints:\n  phone: 480\n  tablet: 768\n",
    )
    .unwrap();
    let value = ResponsiveValue::responsive(
        4,
        BreakpointMap::new().add("phone", 1).add("tablet", 2),
    );

    let style = create_responsive_style(&value, column_count, &options);

    let keys: Vec<_> = style.keys().collect();
    assert_eq!(
        keys,
        vec![
            "columnCount",
            "@media (max-width: 768px)",
            "@media (max-width: 480px)",
        ]
    );
}
