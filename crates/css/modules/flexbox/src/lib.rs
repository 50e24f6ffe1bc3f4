//! CSS Flexible Box Layout Module Level 1: Flex layout engine.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! [`FlexLayout`] lays out the children of one flex container. Children are measured through
//! [`MeasurableChild`] and receive their content boxes through [`GeometrySetter`]; their
//! computed styles are passed in explicitly as a slice parallel to the children.

mod child;

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4: Flex Items
#[path = "4_flex_items/mod.rs"]
mod chapter4;
// Spec: §5: Ordering and Orientation
#[path = "5_ordering_and_orientation/mod.rs"]
mod chapter5;
// Spec: §7: Flexibility
#[path = "7_flexibility/mod.rs"]
mod chapter7;
// Spec: §8: Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9: Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter4::{FlexItem, FlexViolation, create_items, is_flex_item};
pub use chapter5::{FlexAxis, FlexContainer, FlexContainerState, LineWrap};
pub use chapter7::{clamp_to_bounds, freeze_at_preferred, resolve_flexible_lengths};
pub use chapter8::{
    BaselineEdge, align_content_params, align_items_in_line, justify_params, main_axis_alignment,
};
pub use chapter9::{FlexLayout, FlexLine, FlexLineView, FlexPlacement};
pub use child::{ContentBox, GeometrySetter, MeasurableChild};
