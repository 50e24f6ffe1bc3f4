#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

mod common;

use anyhow::Result;
use common::{RecordingChild, approx, init_logging};
use css_flexbox::{FlexContainer, FlexLayout};
use css_orchestrator::{ComputedStyle, PropertyMap};

/// Container properties followed by one property map per child.
const SPACE_BETWEEN_WRAP: &str = r#"[
    {
        "display": "flex",
        "flex-wrap": "wrap",
        "justify-content": "space-between",
        "align-items": "flex-end",
        "width": "200px"
    },
    [
        { "width": "50px", "height": "10px", "margin-right": "5px" },
        { "width": "50px", "height": "20px", "padding-left": "5px" },
        { "width": "50px", "height": "5px" },
        { "flex-basis": "80px", "flex-grow": 1, "height": "15px" },
        { "width": "10px", "position": "absolute" }
    ]
]"#;

fn resolve_fixture(source: &str) -> Result<(ComputedStyle, Vec<ComputedStyle>)> {
    let (container, children): (PropertyMap, Vec<PropertyMap>) = serde_json::from_str(source)?;
    let container_style = ComputedStyle::resolve(&container)?;
    let child_styles = children
        .iter()
        .map(ComputedStyle::resolve)
        .collect::<Result<Vec<_>>>()?;
    Ok((container_style, child_styles))
}

#[test]
fn json_styles_drive_layout() -> Result<()> {
    init_logging();
    let (container_style, styles) = resolve_fixture(SPACE_BETWEEN_WRAP)?;
    let content_width = container_style.width.definite();
    let container = FlexContainer::new(container_style).with_content_size(content_width, None);
    let children = vec![RecordingChild::default(); styles.len()];

    let mut layout = FlexLayout::new();
    layout.calculate_layout(&container, &styles, &children);

    let lines = layout.lines();
    let membership: Vec<Vec<usize>> = lines.iter().map(|line| line.child_indices.clone()).collect();
    // Outer sizes 55 + 55 + 50 = 160; the 80px basis item wraps; the absolute child is skipped.
    assert_eq!(membership, vec![vec![0, 1, 2], vec![3]]);

    let placements = layout.placements();
    let first_line: Vec<f32> = placements
        .iter()
        .take(3)
        .map(|placement| placement.main_pos)
        .collect();
    // 40px free space split into two gaps of 20.
    let expected = [0.0, 80.0, 150.0];
    for (got, want) in first_line.iter().zip(expected) {
        assert!(approx(*got, want), "{first_line:?}");
    }

    // The growing item fills the second line.
    let grown = placements.get(3).map_or(0.0, |placement| placement.main_size);
    assert!(approx(grown, 200.0), "{grown}");

    // flex-end: the 5px item sits at the bottom of the 20px line.
    let short = placements.get(2).map_or(0.0, |placement| placement.cross_pos);
    assert!(approx(short, 15.0), "{short}");
    Ok(())
}

/// Sizing keywords, percentages and unlisted display types are indefinite, not errors.
const KEYWORD_SIZES: &str = r#"[
    { "display": "flex", "width": "100px" },
    [
        { "flex-basis": "content", "width": "50%", "min-width": "min-content", "height": "max-content" },
        { "width": "60px", "max-width": "fit-content", "display": "grid", "position": "sticky" }
    ]
]"#;

#[test]
fn keyword_sizes_lay_out_as_indefinite() -> Result<()> {
    init_logging();
    let (container_style, styles) = resolve_fixture(KEYWORD_SIZES)?;
    let container = FlexContainer::new(container_style)
        .with_content_size(Some(100.0), Some(30.0));
    let children = vec![RecordingChild::sized(80.0, 10.0), RecordingChild::sized(0.0, 10.0)];

    let mut layout = FlexLayout::new();
    layout.calculate_layout(&container, &styles, &children);

    let placements = layout.placements();
    assert_eq!(placements.len(), 2);
    let sizes: Vec<f32> = placements.iter().map(|placement| placement.main_size).collect();
    // Bases 80 (measured) and 60 shrink by 40 weighted by base size.
    let expected = [80.0 - 40.0 * 80.0 / 140.0, 60.0 - 40.0 * 60.0 / 140.0];
    for (got, want) in sizes.iter().zip(expected) {
        assert!(approx(*got, want), "{sizes:?}");
    }
    let second = placements.get(1).map_or(0.0, |placement| placement.main_pos);
    assert!(approx(second, expected[0]), "{second}");
    Ok(())
}

#[test]
fn unknown_keyword_in_fixture_is_reported() {
    let broken = r#"[{ "flex-direction": "diagonal" }, []]"#;
    let message = resolve_fixture(broken)
        .err()
        .map(|err| format!("{err:#}"))
        .unwrap_or_default();
    assert!(message.contains("flex-direction"), "got: {message}");
}
