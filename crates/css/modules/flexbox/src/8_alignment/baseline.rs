//! Baseline alignment support for flex items and flex containers.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-baselines>

use crate::chapter4::FlexItem;
use crate::chapter5::FlexAxis;
use crate::child::MeasurableChild;

/// Which baseline set a container reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineEdge {
    First,
    Last,
}

/// Cross size of a line from its items' outer preferred cross sizes.
///
/// Baseline-aligned items contribute the largest distance above their baseline plus the largest
/// distance below it; collapsed items contribute their strut.
pub fn line_cross_size_from_items(items: &[FlexItem], direction: FlexAxis) -> f32 {
    let mut max_start_outer_baseline_offset = 0.0f32;
    let mut max_end_outer_baseline_offset = 0.0f32;
    let mut max_outer_preferred_cross_size = 0.0f32;
    for item in items {
        if item.collapsed {
            max_outer_preferred_cross_size = max_outer_preferred_cross_size.max(item.strut_size);
        } else if item.participates_in_baseline(direction)
            && let Some(baseline_offset) = item.baseline_offset
        {
            let start_outer_baseline_offset = item.cross_insets.start + baseline_offset;
            let end_outer_baseline_offset =
                item.flex_preferred_cross_size - baseline_offset + item.cross_insets.end;
            max_start_outer_baseline_offset =
                max_start_outer_baseline_offset.max(start_outer_baseline_offset);
            max_end_outer_baseline_offset =
                max_end_outer_baseline_offset.max(end_outer_baseline_offset);
        } else {
            max_outer_preferred_cross_size =
                max_outer_preferred_cross_size.max(item.outer_preferred_cross_size());
        }
    }
    max_outer_preferred_cross_size
        .max(max_start_outer_baseline_offset + max_end_outer_baseline_offset)
}

/// Largest distance from the line's cross start to the baseline of a baseline-aligned item.
pub fn line_baseline_reference(items: &[FlexItem], direction: FlexAxis) -> f32 {
    items
        .iter()
        .filter(|item| item.participates_in_baseline(direction))
        .map(|item| item.cross_insets.start + item.baseline_offset.unwrap_or(0.0))
        .fold(0.0f32, f32::max)
}

/// Baseline of a container from one of its lines, relative to its content-box top.
///
/// The line's baseline-aligned item is preferred; otherwise its first (or last) visible item is
/// used. Returns `None` for lines without visible items.
pub fn line_baseline<C: MeasurableChild>(
    items: &[FlexItem],
    children: &[C],
    direction: FlexAxis,
    edge: BaselineEdge,
) -> Option<f32> {
    let mut candidates = items.iter().filter(|item| !item.collapsed);
    let chosen = match edge {
        BaselineEdge::First => {
            let mut baseline_aligned = candidates
                .clone()
                .filter(|item| item.participates_in_baseline(direction));
            baseline_aligned.next().or_else(|| candidates.next())
        }
        BaselineEdge::Last => {
            let mut baseline_aligned = candidates
                .clone()
                .filter(|item| item.participates_in_baseline(direction));
            baseline_aligned.next_back().or_else(|| candidates.next_back())
        }
    }?;
    let child = children.get(chosen.child_index)?;
    let (content_width, content_top) = match direction {
        FlexAxis::Row => (chosen.used_main_size, chosen.used_cross_pos),
        FlexAxis::Column => (chosen.used_cross_size, chosen.used_main_pos),
    };
    let offset = match edge {
        BaselineEdge::First => child.first_baseline_offset(content_width),
        BaselineEdge::Last => child.last_baseline_offset(content_width),
    };
    Some(content_top + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::AxisInsets;
    use css_orchestrator::style_model::AlignItems;

    struct Text {
        ascent: f32,
    }

    impl MeasurableChild for Text {
        fn preferred_width(&self) -> f32 {
            0.0
        }

        fn preferred_height(&self, _width: f32) -> f32 {
            0.0
        }

        fn first_baseline_offset(&self, _width: f32) -> f32 {
            self.ascent
        }

        fn last_baseline_offset(&self, _width: f32) -> f32 {
            self.ascent * 2.0
        }
    }

    fn baseline_item(cross: f32, baseline: f32) -> FlexItem {
        FlexItem {
            align_self: AlignItems::Baseline,
            flex_preferred_cross_size: cross,
            baseline_offset: Some(baseline),
            ..FlexItem::default()
        }
    }

    #[test]
    /// # Panics
    /// Panics if the line is not tall enough for the tallest ascent plus the deepest descent.
    fn baseline_items_extend_line_cross_size() {
        let mut items = vec![baseline_item(30.0, 25.0), baseline_item(40.0, 10.0)];
        if let Some(first) = items.first_mut() {
            first.cross_insets = AxisInsets {
                start: 5.0,
                end: 0.0,
            };
        }
        // Above: max(5 + 25, 10) = 30. Below: max(5, 30) = 30.
        let line = line_cross_size_from_items(&items, FlexAxis::Row);
        assert!((line - 60.0).abs() < 0.001);
        assert!((line_baseline_reference(&items, FlexAxis::Row) - 30.0).abs() < 0.001);
        // Columns never align baselines.
        let column = line_cross_size_from_items(&items, FlexAxis::Column);
        assert!((column - 40.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if the container baseline is not read from the chosen item's position.
    fn container_baseline_prefers_baseline_aligned_item() {
        let plain = FlexItem {
            child_index: 0,
            used_cross_pos: 2.0,
            ..FlexItem::default()
        };
        let aligned = FlexItem {
            child_index: 1,
            used_cross_pos: 7.0,
            ..baseline_item(20.0, 12.0)
        };
        let children = [Text { ascent: 3.0 }, Text { ascent: 12.0 }];
        let items = [plain, aligned];
        let first = line_baseline(&items, &children, FlexAxis::Row, BaselineEdge::First);
        assert_eq!(first, Some(19.0));
        let last = line_baseline(&items, &children, FlexAxis::Row, BaselineEdge::Last);
        assert_eq!(last, Some(31.0));
        let column = line_baseline(&items, &children, FlexAxis::Column, BaselineEdge::First);
        assert_eq!(column, Some(3.0));
        assert_eq!(
            line_baseline::<Text>(&[], &[], FlexAxis::Row, BaselineEdge::First),
            None
        );
    }
}
