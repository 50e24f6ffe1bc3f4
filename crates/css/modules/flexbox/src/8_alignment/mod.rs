//! Alignment: main-axis justification, cross-axis alignment and baselines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

mod baseline;
mod cross_axis;
mod main_axis;

pub use baseline::{BaselineEdge, line_baseline, line_cross_size_from_items};
pub use cross_axis::{align_content_params, align_items_in_line, resolve_used_cross_size};
pub use main_axis::{justify_params, main_axis_alignment};
