//! Flexbox property resolvers.

use anyhow::Result;
use log::debug;

use crate::computed_value::StyleResolver;
use crate::style_model::{
    AlignContent, AlignItems, AlignSelf, ComputedStyle, FlexDirection, FlexWrap, JustifyContent,
};

use super::super::{resolve_factor, resolve_keyword, resolve_size};

/// Resolve flex scalars: grow, shrink, basis.
///
/// # Errors
/// Returns an error for negative factors. Keyword factors read as `0`; a `flex-basis` that is
/// neither a length nor `auto` is indefinite.
pub fn apply_flex_scalars<R: StyleResolver + ?Sized>(
    computed: &mut ComputedStyle,
    resolver: &R,
) -> Result<()> {
    computed.flex_grow = resolve_factor(resolver, "flex-grow")?;
    computed.flex_shrink = resolve_factor(resolver, "flex-shrink")?;
    computed.flex_basis = resolve_size(resolver, "flex-basis");
    Ok(())
}

/// Resolve container and item alignment keywords.
///
/// # Errors
/// Returns an error for keywords outside the supported grammar.
pub fn apply_flex_alignment<R: StyleResolver + ?Sized>(
    computed: &mut ComputedStyle,
    resolver: &R,
) -> Result<()> {
    computed.flex_direction = resolve_keyword(
        resolver,
        "flex-direction",
        &[
            ("row", FlexDirection::Row),
            ("row-reverse", FlexDirection::RowReverse),
            ("column", FlexDirection::Column),
            ("column-reverse", FlexDirection::ColumnReverse),
        ],
    )?;
    computed.flex_wrap = resolve_keyword(
        resolver,
        "flex-wrap",
        &[
            ("nowrap", FlexWrap::NoWrap),
            ("wrap", FlexWrap::Wrap),
            ("wrap-reverse", FlexWrap::WrapReverse),
        ],
    )?;
    computed.justify_content = resolve_keyword(
        resolver,
        "justify-content",
        &[
            ("flex-start", JustifyContent::FlexStart),
            ("start", JustifyContent::FlexStart),
            ("flex-end", JustifyContent::FlexEnd),
            ("end", JustifyContent::FlexEnd),
            ("center", JustifyContent::Center),
            ("space-between", JustifyContent::SpaceBetween),
            ("space-around", JustifyContent::SpaceAround),
            ("space-evenly", JustifyContent::SpaceEvenly),
        ],
    )?;
    computed.align_content = resolve_keyword(
        resolver,
        "align-content",
        &[
            ("stretch", AlignContent::Stretch),
            ("normal", AlignContent::Stretch),
            ("flex-start", AlignContent::FlexStart),
            ("start", AlignContent::FlexStart),
            ("flex-end", AlignContent::FlexEnd),
            ("end", AlignContent::FlexEnd),
            ("center", AlignContent::Center),
            ("space-between", AlignContent::SpaceBetween),
            ("space-around", AlignContent::SpaceAround),
            ("space-evenly", AlignContent::SpaceEvenly),
        ],
    )?;
    computed.align_items = resolve_keyword(
        resolver,
        "align-items",
        &[
            ("stretch", AlignItems::Stretch),
            ("normal", AlignItems::Stretch),
            ("flex-start", AlignItems::FlexStart),
            ("start", AlignItems::FlexStart),
            ("flex-end", AlignItems::FlexEnd),
            ("end", AlignItems::FlexEnd),
            ("center", AlignItems::Center),
            ("baseline", AlignItems::Baseline),
        ],
    )?;
    computed.align_self = resolve_keyword(
        resolver,
        "align-self",
        &[
            ("auto", AlignSelf::Auto),
            ("stretch", AlignSelf::Stretch),
            ("normal", AlignSelf::Stretch),
            ("flex-start", AlignSelf::FlexStart),
            ("start", AlignSelf::FlexStart),
            ("flex-end", AlignSelf::FlexEnd),
            ("end", AlignSelf::FlexEnd),
            ("center", AlignSelf::Center),
            ("baseline", AlignSelf::Baseline),
        ],
    )?;
    debug!(
        target: "css::orchestrator::resolve",
        "[RESOLVE] flex direction={:?} wrap={:?} justify={:?} align-content={:?} align-items={:?}",
        computed.flex_direction,
        computed.flex_wrap,
        computed.justify_content,
        computed.align_content,
        computed.align_items
    );
    Ok(())
}
