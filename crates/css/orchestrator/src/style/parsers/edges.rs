//! Margin, padding, and border-width resolvers.

use crate::computed_value::StyleResolver;
use crate::style_model::{ComputedStyle, Edges, MarginEdges};

use super::super::{resolve_length, resolve_margin};

/// Resolve the four longhands `{prefix}-top` ... `{prefix}-left{suffix}` as lengths.
fn resolve_edges<R: StyleResolver + ?Sized>(resolver: &R, prefix: &str, suffix: &str) -> Edges {
    Edges {
        top: resolve_length(resolver, &format!("{prefix}-top{suffix}")),
        right: resolve_length(resolver, &format!("{prefix}-right{suffix}")),
        bottom: resolve_length(resolver, &format!("{prefix}-bottom{suffix}")),
        left: resolve_length(resolver, &format!("{prefix}-left{suffix}")),
    }
}

/// Resolve margins (which may be `auto`), border widths and padding.
///
/// Values that are neither a length nor an `auto` margin count as `0px`.
pub fn apply_edges_and_borders<R: StyleResolver + ?Sized>(
    computed: &mut ComputedStyle,
    resolver: &R,
) {
    computed.margin = MarginEdges {
        top: resolve_margin(resolver, "margin-top"),
        right: resolve_margin(resolver, "margin-right"),
        bottom: resolve_margin(resolver, "margin-bottom"),
        left: resolve_margin(resolver, "margin-left"),
    };
    computed.border_width = resolve_edges(resolver, "border", "-width");
    computed.padding = resolve_edges(resolver, "padding", "");
}
