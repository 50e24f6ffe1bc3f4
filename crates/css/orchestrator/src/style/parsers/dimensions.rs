//! Width, height, min/max dimension resolvers.

use crate::computed_value::StyleResolver;
use crate::style_model::ComputedStyle;

use super::super::{resolve_max_size, resolve_size};

/// Resolve width/height and their min/max bounds.
///
/// Keywords other than `auto` / `none`, and percentages, resolve to indefinite sizes.
pub fn apply_dimensions<R: StyleResolver + ?Sized>(computed: &mut ComputedStyle, resolver: &R) {
    computed.width = resolve_size(resolver, "width");
    computed.height = resolve_size(resolver, "height");
    computed.min_width = resolve_size(resolver, "min-width");
    computed.min_height = resolve_size(resolver, "min-height");
    computed.max_width = resolve_max_size(resolver, "max-width");
    computed.max_height = resolve_max_size(resolver, "max-height");
}
