//! Cross size determination for items and lines, and `visibility: collapse` struts.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

use css_orchestrator::style_model::AlignContent;
use log::debug;

use super::lines::FlexLine;
use crate::chapter4::FlexItem;
use crate::chapter5::{FlexAxis, FlexContainerState, LineWrap};
use crate::chapter7::clamp_to_bounds;
use crate::chapter8::line_cross_size_from_items;
use crate::child::MeasurableChild;

/// Hypothetical cross size of every visible item, clamped to its min/max cross size.
///
/// Row items are measured at their used main size; column items by their preferred width.
/// Baseline-aligned row items also record their first baseline.
pub fn calculate_items_preferred_cross_size<C: MeasurableChild>(
    items: &mut [FlexItem],
    children: &[C],
    direction: FlexAxis,
) {
    for item in items.iter_mut().filter(|item| !item.collapsed) {
        let Some(child) = children.get(item.child_index) else {
            continue;
        };
        let preferred = item.cross_size.unwrap_or_else(|| match direction {
            FlexAxis::Row => child.preferred_height(item.used_main_size),
            FlexAxis::Column => child.preferred_width(),
        });
        item.flex_preferred_cross_size =
            clamp_to_bounds(preferred, item.min_cross_size, item.max_cross_size);
        item.baseline_offset = item
            .participates_in_baseline(direction)
            .then(|| child.first_baseline_offset(item.used_main_size));
    }
}

/// Cross size of every line.
///
/// A single-line container with a definite cross size uses that size (widened by collapsed
/// struts). Otherwise each line fits its items. With `align-content: stretch` and a definite
/// cross size, positive leftover space is shared evenly between lines.
pub fn calculate_lines_cross_size(
    lines: &mut [FlexLine],
    items: &[FlexItem],
    state: &FlexContainerState,
    align_content: AlignContent,
) {
    if state.wrap == LineWrap::NoWrap && state.definite_container_cross_size {
        for line in lines.iter_mut() {
            line.cross_size = line
                .items(items)
                .iter()
                .filter(|item| item.collapsed)
                .map(|item| item.strut_size)
                .fold(state.container_cross_size, f32::max);
        }
    } else {
        for line in lines.iter_mut() {
            line.cross_size = line_cross_size_from_items(line.items(items), state.direction);
        }
    }

    if align_content == AlignContent::Stretch
        && state.definite_container_cross_size
        && !lines.is_empty()
    {
        let total_cross_size: f32 = lines.iter().map(|line| line.cross_size).sum();
        let free_space = (state.container_cross_size - total_cross_size) / lines.len() as f32;
        if free_space > 0.0 {
            for line in lines.iter_mut() {
                line.cross_size += free_space;
            }
        }
    }
    debug!(
        target: "css::flexbox::cross",
        "[FLEX-CROSS] restarted={} line_cross_sizes={:?}",
        state.restarted_layout,
        lines.iter().map(|line| line.cross_size).collect::<Vec<_>>()
    );
}

/// Mark items with `visibility: collapse` as collapsed, with their line's cross size as strut.
///
/// Returns whether any item collapsed.
pub fn collapse_items(lines: &[FlexLine], items: &mut [FlexItem]) -> bool {
    let mut any_collapsed = false;
    for line in lines {
        for item in line
            .items_mut(items)
            .iter_mut()
            .filter(|item| item.visibility_collapse)
        {
            item.collapsed = true;
            item.strut_size = line.cross_size;
            any_collapsed = true;
            debug!(
                target: "css::flexbox::cross",
                "[FLEX-COLLAPSE] child={} strut={:.3}",
                item.child_index, item.strut_size
            );
        }
    }
    any_collapsed
}
