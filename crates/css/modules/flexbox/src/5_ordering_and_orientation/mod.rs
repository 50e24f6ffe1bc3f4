//! Ordering and Orientation: flex flow direction, line wrapping and axis mapping.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flow-order>

use css_box::Axis;
use css_orchestrator::style_model::{ComputedStyle, FlexDirection, FlexWrap};
use log::debug;

use crate::child::ContentBox;

/// Main-axis orientation of a flex container.
///
/// `row-reverse` and `column-reverse` map onto their forward axis; items are never reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexAxis {
    #[default]
    Row,
    Column,
}

impl FlexAxis {
    #[inline]
    pub const fn from_direction(direction: FlexDirection) -> Self {
        match direction {
            FlexDirection::Row | FlexDirection::RowReverse => Self::Row,
            FlexDirection::Column | FlexDirection::ColumnReverse => Self::Column,
        }
    }

    /// Physical axis items are laid out along.
    #[inline]
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Row => Axis::Horizontal,
            Self::Column => Axis::Vertical,
        }
    }

    #[inline]
    pub const fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

/// Line wrapping mode. `wrap-reverse` wraps like `wrap`; line order is not flipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineWrap {
    #[default]
    NoWrap,
    Wrap,
}

impl LineWrap {
    #[inline]
    pub const fn from_wrap(wrap: FlexWrap) -> Self {
        match wrap {
            FlexWrap::NoWrap => Self::NoWrap,
            FlexWrap::Wrap | FlexWrap::WrapReverse => Self::Wrap,
        }
    }
}

/// A flex container as seen by one layout invocation: its computed style and the size of its
/// content box. `None` means the dimension is not known yet (e.g. during a preferred-size query).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexContainer {
    pub style: ComputedStyle,
    pub content_width: Option<f32>,
    pub content_height: Option<f32>,
}

impl FlexContainer {
    #[inline]
    pub const fn new(style: ComputedStyle) -> Self {
        Self {
            style,
            content_width: None,
            content_height: None,
        }
    }

    /// Set both content-box dimensions.
    #[inline]
    #[must_use]
    pub fn with_content_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.content_width = width;
        self.content_height = height;
        self
    }

    /// The same container measured at a fixed content width and unknown height.
    #[inline]
    #[must_use]
    pub fn at_width(&self, width: f32) -> Self {
        Self {
            style: self.style.clone(),
            content_width: Some(width),
            content_height: None,
        }
    }
}

/// Transient per-invocation container state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexContainerState {
    pub direction: FlexAxis,
    pub wrap: LineWrap,
    /// Content size along the main axis; `0.0` when the main size is infinite.
    pub container_main_size: f32,
    /// Content size along the cross axis; `0.0` when not definite.
    pub container_cross_size: f32,
    pub definite_container_cross_size: bool,
    pub infinite_container_main_size: bool,
    /// Set only while the one collapse restart pass runs.
    pub restarted_layout: bool,
    /// Container content width regardless of direction, used to size column items.
    pub content_width: Option<f32>,
}

impl FlexContainerState {
    /// Resolve direction, wrapping and per-axis sizes of `container`.
    pub fn resolve(container: &FlexContainer) -> Self {
        let direction = FlexAxis::from_direction(container.style.flex_direction);
        let wrap = LineWrap::from_wrap(container.style.flex_wrap);
        let (main, cross) = match direction {
            FlexAxis::Row => (container.content_width, container.content_height),
            FlexAxis::Column => (container.content_height, container.content_width),
        };
        let state = Self {
            direction,
            wrap,
            container_main_size: main.unwrap_or(0.0),
            container_cross_size: cross.unwrap_or(0.0),
            definite_container_cross_size: cross.is_some(),
            infinite_container_main_size: main.is_none(),
            restarted_layout: false,
            content_width: container.content_width,
        };
        debug!(
            target: "css::flexbox::items",
            "[FLEX-CONTAINER] direction={:?} wrap={:?} main={:?} cross={:?}",
            state.direction, state.wrap, main, cross
        );
        state
    }

    /// Split a physical `(width, height)` pair into `(main, cross)`.
    #[inline]
    pub const fn main_and_cross<T: Copy>(self, width: T, height: T) -> (T, T) {
        match self.direction {
            FlexAxis::Row => (width, height),
            FlexAxis::Column => (height, width),
        }
    }

    /// Map a logical box onto physical content-box coordinates.
    #[inline]
    pub const fn to_physical(
        self,
        main_pos: f32,
        cross_pos: f32,
        main_size: f32,
        cross_size: f32,
    ) -> ContentBox {
        match self.direction {
            FlexAxis::Row => ContentBox::xywh(main_pos, cross_pos, main_size, cross_size),
            FlexAxis::Column => ContentBox::xywh(cross_pos, main_pos, cross_size, main_size),
        }
    }
}
