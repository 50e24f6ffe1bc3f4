//! Flex Items: identification and per-child sizing records.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use css_box::{AutoMargins, AxisInsets, auto_margins, compute_box_sides};
use css_orchestrator::style_model::{
    AlignItems, ComputedStyle, Display, Position, SizeValue, Visibility,
};
use log::debug;

use crate::chapter5::{FlexAxis, FlexContainerState};
use crate::chapter7::clamp_to_bounds;
use crate::child::MeasurableChild;

/// Which bound the flexing loop clamped an item to on its latest iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexViolation {
    #[default]
    None,
    MinViolation,
    MaxViolation,
}

/// Sizing record for one flex item, rebuilt on every layout invocation.
///
/// Sizes are content-box sizes; `*_insets` hold margin + border + padding per side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexItem {
    /// Index of the child in the caller-owned child list.
    pub child_index: usize,

    // Definite sizes (`None` when the style is a keyword).
    pub main_size: Option<f32>,
    pub cross_size: Option<f32>,
    /// Definite `min-*`, or the automatic minimum when `min-*` is `auto`.
    pub min_main_size: Option<f32>,
    pub max_main_size: Option<f32>,
    pub min_cross_size: Option<f32>,
    pub max_cross_size: Option<f32>,

    pub main_insets: AxisInsets,
    pub cross_insets: AxisInsets,
    pub main_auto_margins: AutoMargins,
    pub cross_auto_margins: AutoMargins,

    /// `align-self` with `auto` already resolved against `align-items`.
    pub align_self: AlignItems,
    pub visibility_collapse: bool,

    pub flex_base_size: f32,
    pub flex_preferred_main_size: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub scaled_flex_shrink: f32,

    // Written by the flexing loop.
    pub used_main_size: f32,
    pub frozen: bool,
    pub flex_violation: FlexViolation,

    pub flex_preferred_cross_size: f32,
    pub used_cross_size: f32,
    /// Content-box start along the main axis.
    pub used_main_pos: f32,
    /// Content-box start along the cross axis.
    pub used_cross_pos: f32,
    /// Space given to `auto` main margins by main-axis alignment.
    pub main_auto_margin_space: AxisInsets,
    /// First baseline offset from the content-box start, for baseline-aligned row items.
    pub baseline_offset: Option<f32>,

    pub collapsed: bool,
    pub strut_size: f32,
}

impl FlexItem {
    #[inline]
    pub fn outer_preferred_main_size(&self) -> f32 {
        self.main_insets.total() + self.flex_preferred_main_size
    }

    /// Outer used main size including any auto margin space.
    #[inline]
    pub fn outer_used_main_size(&self) -> f32 {
        self.main_insets.total() + self.used_main_size + self.main_auto_margin_space.total()
    }

    #[inline]
    pub fn outer_preferred_cross_size(&self) -> f32 {
        self.cross_insets.total() + self.flex_preferred_cross_size
    }

    #[inline]
    pub fn outer_used_cross_size(&self) -> f32 {
        self.cross_insets.total() + self.used_cross_size
    }

    /// Whether the item aligns by baseline along the cross axis.
    ///
    /// Only row containers align baselines; auto cross margins take precedence.
    #[inline]
    pub fn participates_in_baseline(&self, direction: FlexAxis) -> bool {
        direction == FlexAxis::Row
            && self.align_self == AlignItems::Baseline
            && !self.cross_auto_margins.any()
            && !self.collapsed
    }

    /// Whether the item's used cross size is the line's cross size minus its insets.
    #[inline]
    pub fn is_stretched(&self) -> bool {
        self.align_self == AlignItems::Stretch
            && self.cross_size.is_none()
            && !self.cross_auto_margins.any()
    }
}

/// Returns true when the child is an in-flow flex item.
///
/// Behavior:
/// - Excludes `display: none`.
/// - Excludes out-of-flow boxes (`position: absolute | fixed`); `sticky` stays in flow.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub const fn is_flex_item(style: &ComputedStyle) -> bool {
    !matches!(style.display, Display::None)
        && !matches!(style.position, Position::Absolute | Position::Fixed)
}

/// Build one [`FlexItem`] per eligible child.
///
/// `styles` is parallel to `children`. `align_items` is the container's value used to resolve
/// `align-self: auto`.
pub fn create_items<C: MeasurableChild>(
    state: &FlexContainerState,
    align_items: AlignItems,
    styles: &[ComputedStyle],
    children: &[C],
) -> Vec<FlexItem> {
    debug_assert_eq!(
        styles.len(),
        children.len(),
        "every child needs a computed style"
    );
    let mut items = Vec::with_capacity(children.len());
    for (child_index, (style, child)) in styles.iter().zip(children).enumerate() {
        if !is_flex_item(style) {
            debug!(
                target: "css::flexbox::items",
                "[FLEX-ITEMS] skipping child {child_index}: display={:?} position={:?}",
                style.display, style.position
            );
            continue;
        }
        items.push(create_item(state, align_items, child_index, style, child));
    }
    items
}

/// Resolve definite sizes, insets, the automatic minimum and the flex base size of one child.
fn create_item<C: MeasurableChild>(
    state: &FlexContainerState,
    align_items: AlignItems,
    child_index: usize,
    style: &ComputedStyle,
    child: &C,
) -> FlexItem {
    let direction = state.direction;
    let (main_size, cross_size) = state.main_and_cross(style.width, style.height);
    let (min_main, min_cross) = state.main_and_cross(style.min_width, style.min_height);
    let (max_main, max_cross) = state.main_and_cross(style.max_width, style.max_height);

    let mut item = FlexItem {
        child_index,
        main_size: main_size.definite(),
        cross_size: cross_size.definite(),
        min_main_size: min_main.definite(),
        max_main_size: max_main.definite(),
        min_cross_size: min_cross.definite(),
        max_cross_size: max_cross.definite(),
        align_self: style.align_self.resolve(align_items),
        visibility_collapse: style.visibility == Visibility::Collapse,
        flex_grow: style.flex_grow,
        flex_shrink: style.flex_shrink,
        ..FlexItem::default()
    };

    if min_main.is_auto() {
        item.min_main_size = Some(auto_min_main_size(direction, &item, child));
    }

    let sides = compute_box_sides(style);
    item.main_insets = sides.insets(direction.main_axis());
    item.cross_insets = sides.insets(direction.cross_axis());
    item.main_auto_margins = auto_margins(style, direction.main_axis());
    item.cross_auto_margins = auto_margins(style, direction.cross_axis());

    item.flex_base_size = flex_base_size(state, style.flex_basis, &item, child);
    item.flex_preferred_main_size =
        clamp_to_bounds(item.flex_base_size, item.min_main_size, item.max_main_size);

    debug!(
        target: "css::flexbox::items",
        "[FLEX-ITEMS] child={} base={:.3} preferred={:.3} min={:?} max={:?} grow={} shrink={}",
        child_index,
        item.flex_base_size,
        item.flex_preferred_main_size,
        item.min_main_size,
        item.max_main_size,
        item.flex_grow,
        item.flex_shrink
    );
    item
}

/// Flex base size in priority order: `flex-basis` length, definite main size, then a
/// measurement of the child.
fn flex_base_size<C: MeasurableChild>(
    state: &FlexContainerState,
    flex_basis: SizeValue,
    item: &FlexItem,
    child: &C,
) -> f32 {
    if let Some(basis) = flex_basis.definite() {
        return basis;
    }
    if let Some(main) = item.main_size {
        return main;
    }
    match state.direction {
        FlexAxis::Row => child.preferred_width(),
        FlexAxis::Column => {
            let width = item.cross_size.unwrap_or_else(|| {
                state.content_width.map_or_else(
                    || {
                        clamp_to_bounds(
                            child.preferred_width(),
                            item.min_cross_size,
                            item.max_cross_size,
                        )
                    },
                    |content_width| (content_width - item.cross_insets.total()).max(0.0),
                )
            });
            child.preferred_height(width)
        }
    }
}

/// Automatic minimum main size for `min-width/min-height: auto`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>
///
/// The content size suggestion comes from [`MeasurableChild::min_content_width`] and is `0.0`
/// for children that cannot report one; transferred sizes use
/// [`MeasurableChild::intrinsic_aspect_ratio`] or `1.0`.
fn auto_min_main_size<C: MeasurableChild>(direction: FlexAxis, item: &FlexItem, child: &C) -> f32 {
    let min_content_size = match direction {
        FlexAxis::Row => child.min_content_width(),
        FlexAxis::Column => child
            .min_content_width()
            .map(|width| child.preferred_height(width)),
    }
    .unwrap_or(0.0);

    if let Some(specified) = item.main_size {
        let specified_size = item.max_main_size.map_or(specified, |max| specified.min(max));
        return specified_size.min(min_content_size);
    }
    if let Some(cross) = item.cross_size {
        let clamped_cross_size = clamp_to_bounds(cross, item.min_cross_size, item.max_cross_size);
        let aspect = child
            .intrinsic_aspect_ratio()
            .filter(|ratio| *ratio > 0.0)
            .unwrap_or(1.0);
        let transferred_size = match direction {
            FlexAxis::Row => clamped_cross_size * aspect,
            FlexAxis::Column => clamped_cross_size / aspect,
        };
        return transferred_size.min(min_content_size);
    }
    min_content_size
}
