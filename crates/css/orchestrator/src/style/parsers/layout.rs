//! Box generation keywords (display, position, visibility).

use anyhow::Result;

use crate::computed_value::StyleResolver;
use crate::style_model::{ComputedStyle, Display, Position, Visibility};

use super::super::{resolve_keyword, resolve_keyword_or};

/// Resolve `display`, `position` and `visibility`.
///
/// # Errors
/// Returns an error for `position` or `visibility` keywords outside their grammar.
pub fn apply_layout_keywords<R: StyleResolver + ?Sized>(
    computed: &mut ComputedStyle,
    resolver: &R,
) -> Result<()> {
    // Other display types generate an in-flow block-level box.
    computed.display = resolve_keyword_or(
        resolver,
        "display",
        &[
            ("inline", Display::Inline),
            ("block", Display::Block),
            ("inline-block", Display::InlineBlock),
            ("flex", Display::Flex),
            ("inline-flex", Display::InlineFlex),
            ("none", Display::None),
        ],
        Display::Block,
    );
    computed.position = resolve_keyword(
        resolver,
        "position",
        &[
            ("static", Position::Static),
            ("relative", Position::Relative),
            ("absolute", Position::Absolute),
            ("fixed", Position::Fixed),
            ("sticky", Position::Sticky),
        ],
    )?;
    computed.visibility = resolve_keyword(
        resolver,
        "visibility",
        &[
            ("visible", Visibility::Visible),
            ("hidden", Visibility::Hidden),
            ("collapse", Visibility::Collapse),
        ],
    )?;
    Ok(())
}
