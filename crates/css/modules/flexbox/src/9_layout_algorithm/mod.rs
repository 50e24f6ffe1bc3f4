//! Flex Layout Algorithm: the per-container layout calculator and its protocol queries.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

mod cross_size;
mod lines;

use css_orchestrator::style_model::{AlignContent, ComputedStyle, JustifyContent};
use log::debug;
use tracing::info_span;

use crate::chapter4::{FlexItem, create_items};
use crate::chapter5::{FlexAxis, FlexContainer, FlexContainerState};
use crate::chapter7::{freeze_at_preferred, resolve_flexible_lengths};
use crate::chapter8::{
    BaselineEdge, align_content_params, align_items_in_line, line_baseline, main_axis_alignment,
    resolve_used_cross_size,
};
use crate::child::{GeometrySetter, MeasurableChild};
use cross_size::{calculate_items_preferred_cross_size, calculate_lines_cross_size, collapse_items};
pub use lines::FlexLine;

/// Used geometry of one flex item in the container's logical coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexPlacement {
    pub child_index: usize,
    /// Content-box start along the main axis.
    pub main_pos: f32,
    pub main_size: f32,
    /// Content-box start along the cross axis.
    pub cross_pos: f32,
    pub cross_size: f32,
    /// `visibility: collapse` items: zero main size, strut cross size.
    pub collapsed: bool,
}

/// Read-only view of one computed flex line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLineView {
    /// Children of the line in order, as indices into the child list.
    pub child_indices: Vec<usize>,
    /// Outer preferred main size of the line's visible items.
    pub main_size: f32,
    pub cross_pos: f32,
    pub cross_size: f32,
}

/// Flex layout calculator for one container.
///
/// Every query recomputes the layout from scratch; nothing is carried between invocations
/// except the results of the latest one, which [`Self::placements`] and [`Self::lines`] expose.
#[derive(Clone, Debug, Default)]
pub struct FlexLayout {
    state: FlexContainerState,
    justify_content: JustifyContent,
    align_content: AlignContent,
    items: Vec<FlexItem>,
    lines: Vec<FlexLine>,
}

impl FlexLayout {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every stage of the algorithm for `container`.
    ///
    /// `styles[i]` is the computed style of `children[i]`. Items, lines, flexing and cross sizes
    /// are computed, `visibility: collapse` items trigger at most one restart, and main- and
    /// cross-axis alignment finally position every item.
    pub fn calculate_layout<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        styles: &[ComputedStyle],
        children: &[C],
    ) {
        let _span = info_span!("flex.calculate_layout").entered();
        self.state = FlexContainerState::resolve(container);
        self.justify_content = container.style.justify_content;
        self.align_content = container.style.align_content;
        self.items = create_items(&self.state, container.style.align_items, styles, children);

        self.create_lines();
        self.flex_lines();
        calculate_items_preferred_cross_size(&mut self.items, children, self.state.direction);
        self.calculate_lines_cross_size();

        if collapse_items(&self.lines, &mut self.items) {
            self.state.restarted_layout = true;
            self.create_lines();
            self.flex_lines();
            calculate_items_preferred_cross_size(&mut self.items, children, self.state.direction);
            self.calculate_lines_cross_size();
            self.state.restarted_layout = false;
        }

        for line in &self.lines {
            for item in line.items_mut(&mut self.items) {
                resolve_used_cross_size(item, line.cross_size);
            }
        }
        self.main_axis_alignment();
        self.cross_axis_alignment();
        debug!(
            target: "css::flexbox::lines",
            "[FLEX-LAYOUT] direction={:?} items={} lines={}",
            self.state.direction,
            self.items.len(),
            self.lines.len()
        );
    }

    fn create_lines(&mut self) {
        self.lines = lines::create_lines(&self.items, &self.state);
    }

    fn flex_lines(&mut self) {
        for line in &self.lines {
            let line_items = line.items_mut(&mut self.items);
            if self.state.infinite_container_main_size {
                freeze_at_preferred(line_items);
            } else {
                resolve_flexible_lengths(line_items, self.state.container_main_size);
            }
        }
    }

    fn calculate_lines_cross_size(&mut self) {
        calculate_lines_cross_size(&mut self.lines, &self.items, &self.state, self.align_content);
    }

    /// Main size a line is justified within.
    fn line_main_size(&self, line: &FlexLine) -> f32 {
        if self.state.infinite_container_main_size {
            line.outer_main_size()
        } else {
            self.state.container_main_size
        }
    }

    fn main_axis_alignment(&mut self) {
        for line in &self.lines {
            let line_main_size = self.line_main_size(line);
            main_axis_alignment(
                line.items_mut(&mut self.items),
                line_main_size,
                self.justify_content,
            );
        }
    }

    fn cross_axis_alignment(&mut self) {
        let (start, between) = if self.state.definite_container_cross_size {
            let total_cross_size: f32 = self.lines.iter().map(|line| line.cross_size).sum();
            align_content_params(
                self.align_content,
                self.state.container_cross_size - total_cross_size,
                self.lines.len(),
            )
        } else {
            (0.0, 0.0)
        };
        let mut pos = start;
        for line in &mut self.lines {
            line.cross_pos = pos;
            pos += line.cross_size + between;
            align_items_in_line(
                line.items_mut(&mut self.items),
                self.state.direction,
                line.cross_pos,
                line.cross_size,
            );
        }
    }

    /// Preferred content width of the container.
    ///
    /// Row: the widest line's outer preferred main size. Column: the sum of line cross sizes.
    pub fn preferred_width<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        styles: &[ComputedStyle],
        children: &[C],
    ) -> f32 {
        self.calculate_layout(container, styles, children);
        match self.state.direction {
            FlexAxis::Row => self.max_line_main_size(),
            FlexAxis::Column => self.total_line_cross_size(),
        }
    }

    /// Preferred content height of the container laid out at content width `width`.
    ///
    /// Row: the sum of line cross sizes. Column: the tallest line's outer preferred main size.
    pub fn preferred_height<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        width: f32,
        styles: &[ComputedStyle],
        children: &[C],
    ) -> f32 {
        self.calculate_layout(&container.at_width(width), styles, children);
        match self.state.direction {
            FlexAxis::Row => self.total_line_cross_size(),
            FlexAxis::Column => self.max_line_main_size(),
        }
    }

    /// Offset of the container's first baseline from its content-box top at content width
    /// `width`; `0.0` when no item provides one.
    pub fn first_baseline_offset<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        width: f32,
        styles: &[ComputedStyle],
        children: &[C],
    ) -> f32 {
        self.baseline_offset(container, width, styles, children, BaselineEdge::First)
    }

    /// Offset of the container's last baseline from its content-box top at content width
    /// `width`; `0.0` when no item provides one.
    pub fn last_baseline_offset<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        width: f32,
        styles: &[ComputedStyle],
        children: &[C],
    ) -> f32 {
        self.baseline_offset(container, width, styles, children, BaselineEdge::Last)
    }

    fn baseline_offset<C: MeasurableChild>(
        &mut self,
        container: &FlexContainer,
        width: f32,
        styles: &[ComputedStyle],
        children: &[C],
        edge: BaselineEdge,
    ) -> f32 {
        let measured = FlexContainer {
            content_width: Some(width),
            ..container.clone()
        };
        self.calculate_layout(&measured, styles, children);
        let direction = self.state.direction;
        let from_line =
            |line: &FlexLine| line_baseline(line.items(&self.items), children, direction, edge);
        let baseline = match edge {
            BaselineEdge::First => self.lines.iter().find_map(from_line),
            BaselineEdge::Last => self.lines.iter().rev().find_map(from_line),
        };
        baseline.unwrap_or(0.0)
    }

    /// Lay out `container` and apply every item's content box to its child, then let each child
    /// lay out its own subtree.
    pub fn layout_subviews<C: GeometrySetter>(
        &mut self,
        container: &FlexContainer,
        styles: &[ComputedStyle],
        children: &mut [C],
    ) {
        self.calculate_layout(container, styles, children);
        for placement in self.placements() {
            let Some(child) = children.get_mut(placement.child_index) else {
                continue;
            };
            child.set_geometry(self.state.to_physical(
                placement.main_pos,
                placement.cross_pos,
                placement.main_size,
                placement.cross_size,
            ));
            child.layout_subviews();
        }
    }

    /// Used geometry of every flex item from the latest invocation, in child order.
    pub fn placements(&self) -> Vec<FlexPlacement> {
        self.items
            .iter()
            .map(|item| FlexPlacement {
                child_index: item.child_index,
                main_pos: item.used_main_pos,
                main_size: item.used_main_size,
                cross_pos: item.used_cross_pos,
                cross_size: item.used_cross_size,
                collapsed: item.collapsed,
            })
            .collect()
    }

    /// Lines from the latest invocation.
    pub fn lines(&self) -> Vec<FlexLineView> {
        self.lines
            .iter()
            .map(|line| FlexLineView {
                child_indices: line
                    .items(&self.items)
                    .iter()
                    .map(|item| item.child_index)
                    .collect(),
                main_size: line.outer_main_size(),
                cross_pos: line.cross_pos,
                cross_size: line.cross_size,
            })
            .collect()
    }

    /// Items from the latest invocation.
    #[inline]
    pub fn items(&self) -> &[FlexItem] {
        &self.items
    }

    /// Container state from the latest invocation.
    #[inline]
    pub const fn state(&self) -> &FlexContainerState {
        &self.state
    }

    fn max_line_main_size(&self) -> f32 {
        self.lines
            .iter()
            .map(FlexLine::outer_main_size)
            .fold(0.0f32, f32::max)
    }

    fn total_line_cross_size(&self) -> f32 {
        self.lines.iter().map(|line| line.cross_size).sum()
    }
}
