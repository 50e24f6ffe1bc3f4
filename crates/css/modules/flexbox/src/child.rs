//! Capabilities the layout engine needs from the children it positions.
//!
//! Children are owned by the host; the engine only measures them and, at the end of a pass,
//! hands each one its content box.

/// Content box of a child in the container's content coordinate space, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ContentBox {
    #[inline]
    pub const fn xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Intrinsic measurement queries. A child may itself be a flex container, in which case these
/// run a nested layout.
pub trait MeasurableChild {
    /// Preferred content width with no width constraint.
    fn preferred_width(&self) -> f32;

    /// Preferred content height when laid out at the given content width.
    fn preferred_height(&self, width: f32) -> f32;

    /// Offset of the first baseline from the content-box top at the given content width.
    fn first_baseline_offset(&self, _width: f32) -> f32 {
        0.0
    }

    /// Offset of the last baseline from the content-box top at the given content width.
    fn last_baseline_offset(&self, _width: f32) -> f32 {
        0.0
    }

    /// Min-content width, when the child can report one.
    ///
    /// `None` makes the automatic minimum size fall back to `0.0`.
    fn min_content_width(&self) -> Option<f32> {
        None
    }

    /// Intrinsic width / height ratio, when the child has one.
    ///
    /// `None` makes transferred sizes use a ratio of `1.0`.
    fn intrinsic_aspect_ratio(&self) -> Option<f32> {
        None
    }
}

/// Geometry application: the only mutations the engine performs on children.
pub trait GeometrySetter: MeasurableChild {
    /// Apply the used content box.
    fn set_geometry(&mut self, content_box: ContentBox);

    /// Lay out the child's own subtree after its geometry is known.
    fn layout_subviews(&mut self);
}
