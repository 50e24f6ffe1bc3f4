//! Cross-axis alignment: line packing, item stretching and `align-self`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-alignment>

use css_orchestrator::style_model::{AlignContent, AlignItems, JustifyContent};
use log::debug;

use super::baseline::line_baseline_reference;
use super::main_axis::justify_params;
use crate::chapter4::FlexItem;
use crate::chapter5::FlexAxis;
use crate::chapter7::clamp_to_bounds;

/// Start offset and between-spacing for packing lines along the cross axis.
///
/// `stretch` packs like `flex-start`; its extra space is already part of the line sizes.
pub fn align_content_params(
    align_content: AlignContent,
    free_space: f32,
    line_count: usize,
) -> (f32, f32) {
    let as_justify = match align_content {
        AlignContent::Stretch | AlignContent::FlexStart => JustifyContent::FlexStart,
        AlignContent::FlexEnd => JustifyContent::FlexEnd,
        AlignContent::Center => JustifyContent::Center,
        AlignContent::SpaceBetween => JustifyContent::SpaceBetween,
        AlignContent::SpaceAround => JustifyContent::SpaceAround,
        AlignContent::SpaceEvenly => JustifyContent::SpaceEvenly,
    };
    justify_params(as_justify, free_space, line_count)
}

/// Final cross size of an item once its line's cross size is known.
///
/// Stretched items fill the line minus their insets (clamped to min/max); collapsed items keep
/// their strut; everything else keeps its preferred cross size.
pub fn resolve_used_cross_size(item: &mut FlexItem, line_cross_size: f32) {
    item.used_cross_size = if item.collapsed {
        item.strut_size
    } else if item.is_stretched() {
        clamp_to_bounds(
            line_cross_size - item.cross_insets.total(),
            item.min_cross_size,
            item.max_cross_size,
        )
    } else {
        item.flex_preferred_cross_size
    };
}

/// Position the items of one line along the cross axis.
///
/// Auto cross margins take positive free space first; otherwise the resolved `align-self`
/// decides. Baseline alignment only applies in row containers and behaves as `flex-start`
/// elsewhere.
pub fn align_items_in_line(
    items: &mut [FlexItem],
    direction: FlexAxis,
    line_cross_pos: f32,
    line_cross_size: f32,
) {
    let baseline_reference = line_baseline_reference(items, direction);
    for item in items.iter_mut() {
        if item.collapsed {
            item.used_cross_pos = line_cross_pos;
            continue;
        }
        let free_space = line_cross_size - item.outer_used_cross_size();
        let offset = if item.cross_auto_margins.any() {
            if free_space > 0.0 && item.cross_auto_margins.start {
                free_space / item.cross_auto_margins.count() as f32
            } else {
                0.0
            }
        } else {
            match item.align_self {
                AlignItems::FlexStart | AlignItems::Stretch => 0.0,
                AlignItems::FlexEnd => free_space,
                AlignItems::Center => free_space * 0.5,
                AlignItems::Baseline => {
                    if item.participates_in_baseline(direction) {
                        baseline_reference
                            - (item.cross_insets.start + item.baseline_offset.unwrap_or(0.0))
                    } else {
                        0.0
                    }
                }
            }
        };
        item.used_cross_pos = line_cross_pos + offset + item.cross_insets.start;
        debug!(
            target: "css::flexbox::align",
            "[FLEX-CROSS] child={} align={:?} line_pos={line_cross_pos:.3} line_size={line_cross_size:.3} free={free_space:.3} pos={:.3} size={:.3}",
            item.child_index, item.align_self, item.used_cross_pos, item.used_cross_size
        );
    }
}
