//! Line breaking: collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use core::ops::Range;

use log::debug;

use crate::chapter4::FlexItem;
use crate::chapter5::{FlexContainerState, LineWrap};

/// One flex line: a contiguous run of items in child order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    /// Items of the line: `[start, end)` into the item list.
    pub start: usize,
    pub end: usize,
    pub total_flex_preferred_main_size: f32,
    pub total_main_noncontent: f32,
    pub cross_size: f32,
    /// Offset of the line from the container's cross start.
    pub cross_pos: f32,
}

impl FlexLine {
    const fn starting_at(start: usize) -> Self {
        Self {
            start,
            end: start,
            total_flex_preferred_main_size: 0.0,
            total_main_noncontent: 0.0,
            cross_size: 0.0,
            cross_pos: 0.0,
        }
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Sum of the outer preferred main sizes of the line's visible items.
    #[inline]
    pub fn outer_main_size(&self) -> f32 {
        self.total_main_noncontent + self.total_flex_preferred_main_size
    }

    #[inline]
    pub fn items<'items>(&self, items: &'items [FlexItem]) -> &'items [FlexItem] {
        items.get(self.range()).unwrap_or_default()
    }

    #[inline]
    pub fn items_mut<'items>(&self, items: &'items mut [FlexItem]) -> &'items mut [FlexItem] {
        items.get_mut(self.range()).unwrap_or_default()
    }
}

/// Break items into lines.
///
/// Without wrapping, or when the main size is infinite, every item shares one line. Otherwise an
/// item starts a new line when the current one is not empty, adding the item's outer preferred
/// size would exceed the container, and that size is positive. Collapsed items stay in their
/// line but take no space. At least one (possibly empty) line is always produced.
pub fn create_lines(items: &[FlexItem], state: &FlexContainerState) -> Vec<FlexLine> {
    let single_line = state.wrap == LineWrap::NoWrap || state.infinite_container_main_size;
    let mut lines = Vec::new();
    let mut line = FlexLine::starting_at(0);
    for (index, item) in items.iter().enumerate() {
        if item.collapsed {
            continue;
        }
        let item_size = item.outer_preferred_main_size();
        let pos = line.outer_main_size() + item_size;
        if !single_line && index > line.start && pos > state.container_main_size && item_size > 0.0
        {
            line.end = index;
            lines.push(line);
            line = FlexLine::starting_at(index);
        }
        line.total_flex_preferred_main_size += item.flex_preferred_main_size;
        line.total_main_noncontent += item.main_insets.total();
    }
    line.end = items.len();
    lines.push(line);
    debug!(
        target: "css::flexbox::lines",
        "[FLEX-LINES] items={} lines={} ranges={:?}",
        items.len(),
        lines.len(),
        lines.iter().map(FlexLine::range).collect::<Vec<_>>()
    );
    lines
}
