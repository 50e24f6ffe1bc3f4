//! CSS Box Model Module Level 3: Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Layout along a flex axis only needs the sum of margin, border and padding on each side of
//! a box (its non-content insets). This crate resolves the physical sides from a computed style
//! and folds them onto a horizontal or vertical axis.

use css_orchestrator::style_model::ComputedStyle;

/// Physical axis of a layout direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right; sides are left/right.
    Horizontal,
    /// Top to bottom; sides are top/bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Box edges used by layout in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSides {
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

/// Non-content insets (margin + border + padding) on both sides of one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisInsets {
    /// Inset on the start side (left or top).
    pub start: f32,
    /// Inset on the end side (right or bottom).
    pub end: f32,
}

impl AxisInsets {
    /// Sum of both sides.
    #[inline]
    pub fn total(self) -> f32 {
        self.start + self.end
    }
}

/// Which sides of one axis carry an `auto` margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoMargins {
    pub start: bool,
    pub end: bool,
}

impl AutoMargins {
    #[inline]
    pub const fn any(self) -> bool {
        self.start || self.end
    }

    /// Number of auto margin slots on this axis (0, 1 or 2).
    #[inline]
    pub fn count(self) -> usize {
        usize::from(self.start) + usize::from(self.end)
    }
}

/// Resolve margin/padding/border widths from `ComputedStyle`.
///
/// Padding and border widths are clamped to be non-negative. Margins can be negative; `auto`
/// margins contribute zero here and are distributed later by the alignment steps.
/// Spec: CSS 2.2 §8.1 (box model) and CSS Box Sizing L3.
pub fn compute_box_sides(style: &ComputedStyle) -> BoxSides {
    BoxSides {
        margin_top: style.margin.top.px_or_zero(),
        margin_right: style.margin.right.px_or_zero(),
        margin_bottom: style.margin.bottom.px_or_zero(),
        margin_left: style.margin.left.px_or_zero(),

        padding_top: style.padding.top.max(0.0),
        padding_right: style.padding.right.max(0.0),
        padding_bottom: style.padding.bottom.max(0.0),
        padding_left: style.padding.left.max(0.0),

        border_top: style.border_width.top.max(0.0),
        border_right: style.border_width.right.max(0.0),
        border_bottom: style.border_width.bottom.max(0.0),
        border_left: style.border_width.left.max(0.0),
    }
}

impl BoxSides {
    /// Margin + border + padding on the start and end side of `axis`.
    #[inline]
    pub fn insets(&self, axis: Axis) -> AxisInsets {
        match axis {
            Axis::Horizontal => AxisInsets {
                start: self.margin_left + self.border_left + self.padding_left,
                end: self.padding_right + self.border_right + self.margin_right,
            },
            Axis::Vertical => AxisInsets {
                start: self.margin_top + self.border_top + self.padding_top,
                end: self.padding_bottom + self.border_bottom + self.margin_bottom,
            },
        }
    }
}

/// Auto margin flags of `style` along `axis`.
#[inline]
pub fn auto_margins(style: &ComputedStyle, axis: Axis) -> AutoMargins {
    match axis {
        Axis::Horizontal => AutoMargins {
            start: style.margin.left.is_auto(),
            end: style.margin.right.is_auto(),
        },
        Axis::Vertical => AutoMargins {
            start: style.margin.top.is_auto(),
            end: style.margin.bottom.is_auto(),
        },
    }
}
