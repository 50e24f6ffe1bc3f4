//! Main-axis alignment: auto margins, then `justify-content`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-alignment>

use css_box::AxisInsets;
use css_orchestrator::style_model::JustifyContent;
use log::debug;

use crate::chapter4::FlexItem;

/// Compute justify-content start offset and between-spacing for `item_count` items sharing
/// `space_available` (which may be negative on overflow).
///
/// `space-between` falls back to `flex-start`, and `space-around`/`space-evenly` to `center`,
/// when fewer than two items (or no items) share the space or the space is negative.
///
/// `space-around` uses the CSS gap `space / item_count` with half a gap at each end, not the
/// `space-between` gap, so the items never overflow the line (DESIGN.md, `justify-content`).
pub fn justify_params(
    justify: JustifyContent,
    space_available: f32,
    item_count: usize,
) -> (f32, f32) {
    let distributable = space_available >= 0.0;
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (space_available, 0.0),
        JustifyContent::Center => (space_available * 0.5, 0.0),
        JustifyContent::SpaceBetween => {
            if distributable && item_count >= 2 {
                (0.0, space_available / (item_count as f32 - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        JustifyContent::SpaceAround => {
            if distributable && item_count >= 2 {
                let gap = space_available / item_count as f32;
                (gap * 0.5, gap)
            } else {
                (space_available * 0.5, 0.0)
            }
        }
        JustifyContent::SpaceEvenly => {
            if distributable && item_count >= 1 {
                let gap = space_available / (item_count as f32 + 1.0);
                (gap, gap)
            } else {
                (space_available * 0.5, 0.0)
            }
        }
    }
}

/// Position the items of one line along the main axis.
///
/// Positive free space goes to `auto` main margins first; whatever remains is distributed by
/// `justify`. Collapsed items take the current position without advancing it.
pub fn main_axis_alignment(items: &mut [FlexItem], container_main_size: f32, justify: JustifyContent) {
    let mut auto_margin_count = 0usize;
    let mut item_count = 0usize;
    let mut space_consumed = 0.0f32;
    for item in items.iter_mut() {
        item.main_auto_margin_space = AxisInsets::default();
        if item.collapsed {
            continue;
        }
        auto_margin_count += item.main_auto_margins.count();
        space_consumed += item.main_insets.total() + item.used_main_size;
        item_count += 1;
    }

    let mut space_available = container_main_size - space_consumed;
    if auto_margin_count > 0 && space_available > 0.0 {
        let space_per_auto_margin = space_available / auto_margin_count as f32;
        for item in items.iter_mut().filter(|item| !item.collapsed) {
            if item.main_auto_margins.start {
                item.main_auto_margin_space.start = space_per_auto_margin;
            }
            if item.main_auto_margins.end {
                item.main_auto_margin_space.end = space_per_auto_margin;
            }
        }
        space_available = 0.0;
    }

    let (start, between) = justify_params(justify, space_available, item_count);
    debug!(
        target: "css::flexbox::align",
        "[FLEX-JUSTIFY] {justify:?} items={item_count} consumed={space_consumed:.3} available={space_available:.3} auto_margins={auto_margin_count} start={start:.3} between={between:.3}"
    );

    let mut pos = start;
    let mut placed = 0usize;
    for item in items.iter_mut() {
        if item.collapsed {
            item.used_main_pos = pos;
            continue;
        }
        if placed > 0 {
            pos += between;
        }
        pos += item.main_insets.start + item.main_auto_margin_space.start;
        item.used_main_pos = pos;
        pos += item.used_main_size + item.main_insets.end + item.main_auto_margin_space.end;
        placed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::AutoMargins;

    fn sized(used: f32) -> FlexItem {
        FlexItem {
            used_main_size: used,
            ..FlexItem::default()
        }
    }

    fn positions(items: &[FlexItem]) -> Vec<f32> {
        items.iter().map(|item| item.used_main_pos).collect()
    }

    fn assert_positions(items: &[FlexItem], expected: &[f32]) {
        let actual = positions(items);
        assert_eq!(actual.len(), expected.len());
        for (got, want) in actual.iter().zip(expected) {
            assert!((got - want).abs() < 0.001, "got {actual:?}, want {expected:?}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if space-between does not place three 50px items at 0, 75 and 150.
    fn space_between_spreads_items() {
        let mut items = vec![sized(50.0), sized(50.0), sized(50.0)];
        main_axis_alignment(&mut items, 200.0, JustifyContent::SpaceBetween);
        assert_positions(&items, &[0.0, 75.0, 150.0]);
    }

    #[test]
    /// # Panics
    /// Panics if flex-end and center do not offset the packed block while keeping item order.
    fn flex_end_and_center_keep_order() {
        let mut items = vec![sized(50.0), sized(30.0)];
        main_axis_alignment(&mut items, 200.0, JustifyContent::FlexEnd);
        assert_positions(&items, &[120.0, 170.0]);
        main_axis_alignment(&mut items, 200.0, JustifyContent::Center);
        assert_positions(&items, &[60.0, 110.0]);
    }

    #[test]
    /// # Panics
    /// Panics if space-around and space-evenly gaps are wrong.
    fn space_around_and_evenly_gaps() {
        let mut items = vec![sized(50.0), sized(50.0)];
        // 100px free: around gap 50, half before the first item.
        main_axis_alignment(&mut items, 200.0, JustifyContent::SpaceAround);
        assert_positions(&items, &[25.0, 125.0]);
        // 100px free over three slots.
        main_axis_alignment(&mut items, 200.0, JustifyContent::SpaceEvenly);
        let third = 100.0 / 3.0;
        assert_positions(&items, &[third, 50.0 + 2.0 * third]);
    }

    #[test]
    /// # Panics
    /// Panics if the single-item and overflow fallbacks are not applied.
    fn distributed_modes_fall_back() {
        let mut single = vec![sized(50.0)];
        main_axis_alignment(&mut single, 200.0, JustifyContent::SpaceBetween);
        assert_positions(&single, &[0.0]);
        main_axis_alignment(&mut single, 200.0, JustifyContent::SpaceAround);
        assert_positions(&single, &[75.0]);

        let mut overflowing = vec![sized(150.0), sized(150.0)];
        main_axis_alignment(&mut overflowing, 200.0, JustifyContent::SpaceAround);
        assert_positions(&overflowing, &[-50.0, 100.0]);
    }

    #[test]
    /// # Panics
    /// Panics if auto margins do not absorb the free space before justify-content applies.
    fn auto_margins_absorb_free_space() {
        let mut items = vec![sized(50.0), sized(50.0)];
        if let Some(second) = items.get_mut(1) {
            second.main_auto_margins = AutoMargins {
                start: true,
                end: false,
            };
        }
        main_axis_alignment(&mut items, 200.0, JustifyContent::Center);
        assert_positions(&items, &[0.0, 150.0]);
        let absorbed = items.get(1).map_or(0.0, |item| item.main_auto_margin_space.start);
        assert!((absorbed - 100.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a collapsed item advances the position of its successors.
    fn collapsed_items_do_not_advance() {
        let mut items = vec![sized(100.0), sized(100.0), sized(100.0)];
        if let Some(middle) = items.get_mut(1) {
            middle.collapsed = true;
            middle.used_main_size = 0.0;
        }
        main_axis_alignment(&mut items, 300.0, JustifyContent::FlexStart);
        assert_positions(&items, &[0.0, 100.0, 100.0]);
    }
}
