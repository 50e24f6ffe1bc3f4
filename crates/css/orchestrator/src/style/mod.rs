//! Resolution of resolver answers into a typed [`ComputedStyle`].
//!
//! This is the only place keyword strings are inspected. Each category lives in its own
//! parser module and writes into the computed style. Sizes and box edges never fail: keywords
//! and percentages outside the supported grammar become indefinite. Flex keywords outside
//! their grammar and negative flex factors are reported as errors naming the property.

mod parsers;

use anyhow::{Context as _, Result, anyhow};
use log::debug;

use crate::computed_value::{ComputedValue, StyleResolver};
use crate::style_model::{ComputedStyle, MarginValue, MaxSizeValue, SizeValue};

impl ComputedStyle {
    /// Build a computed style by querying every property flex layout consumes.
    ///
    /// # Errors
    /// Returns an error when a flex keyword property reports a value outside its grammar, or a
    /// flex factor is negative.
    pub fn resolve<R: StyleResolver + ?Sized>(resolver: &R) -> Result<Self> {
        let mut computed = Self::default();
        parsers::layout::apply_layout_keywords(&mut computed, resolver)?;
        parsers::dimensions::apply_dimensions(&mut computed, resolver);
        parsers::edges::apply_edges_and_borders(&mut computed, resolver);
        parsers::flex::apply_flex_scalars(&mut computed, resolver)?;
        parsers::flex::apply_flex_alignment(&mut computed, resolver)?;
        Ok(computed)
    }
}

fn log_fallback(property: &str, value: &ComputedValue) {
    debug!(
        target: "css::orchestrator::resolve",
        "[RESOLVE] `{property}` has no definite value: {value:?}"
    );
}

/// Look up `property` and map its keyword through `table`.
///
/// Matching is ASCII case-insensitive. Lengths, numbers and unknown keywords are errors.
fn resolve_keyword<R, T>(resolver: &R, property: &str, table: &[(&str, T)]) -> Result<T>
where
    R: StyleResolver + ?Sized,
    T: Copy,
{
    let value = resolver.computed_value(property);
    table
        .iter()
        .find(|(name, _)| value.is_keyword(name))
        .map(|&(_, keyword)| keyword)
        .ok_or_else(|| anyhow!("unsupported value {value:?}"))
        .with_context(|| format!("resolving `{property}`"))
}

/// Like [`resolve_keyword`], but values missing from `table` resolve to `fallback`.
fn resolve_keyword_or<R, T>(resolver: &R, property: &str, table: &[(&str, T)], fallback: T) -> T
where
    R: StyleResolver + ?Sized,
    T: Copy,
{
    let value = resolver.computed_value(property);
    table
        .iter()
        .find(|(name, _)| value.is_keyword(name))
        .map_or_else(
            || {
                log_fallback(property, &value);
                fallback
            },
            |&(_, keyword)| keyword,
        )
}

/// An absolute length, `auto`, or indefinite for anything else.
fn resolve_size<R: StyleResolver + ?Sized>(resolver: &R, property: &str) -> SizeValue {
    match resolver.computed_value(property) {
        ComputedValue::Length(pixels) => SizeValue::Px(pixels),
        value if value.is_keyword("auto") => SizeValue::Auto,
        value => {
            log_fallback(property, &value);
            SizeValue::Indefinite
        }
    }
}

/// An absolute length; `none` and every other value leave the size unbounded.
fn resolve_max_size<R: StyleResolver + ?Sized>(resolver: &R, property: &str) -> MaxSizeValue {
    match resolver.computed_value(property) {
        ComputedValue::Length(pixels) => MaxSizeValue::Px(pixels),
        value if value.is_keyword("none") => MaxSizeValue::None,
        value => {
            log_fallback(property, &value);
            MaxSizeValue::None
        }
    }
}

/// `auto` or an absolute length, for margins. Other values count as `0px`.
fn resolve_margin<R: StyleResolver + ?Sized>(resolver: &R, property: &str) -> MarginValue {
    match resolver.computed_value(property) {
        ComputedValue::Length(pixels) => MarginValue::Px(pixels),
        value if value.is_keyword("auto") => MarginValue::Auto,
        value => {
            log_fallback(property, &value);
            MarginValue::Px(0.0)
        }
    }
}

/// An absolute length. Numbers read as px and keywords or percentages as `0.0`.
fn resolve_length<R: StyleResolver + ?Sized>(resolver: &R, property: &str) -> f32 {
    let value = resolver.computed_value(property);
    if !value.is_length() {
        log_fallback(property, &value);
    }
    value.number()
}

/// A non-negative flex factor. Keywords read as `0.0`.
fn resolve_factor<R: StyleResolver + ?Sized>(resolver: &R, property: &str) -> Result<f32> {
    let value = resolver.computed_value(property);
    let number = value.number();
    if number < 0.0 {
        return Err(anyhow!("negative factor {number}"))
            .with_context(|| format!("resolving `{property}`"));
    }
    if !matches!(value, ComputedValue::Number(_)) {
        log_fallback(property, &value);
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computed_value::PropertyMap;
    use crate::style_model::{
        AlignContent, AlignSelf, Display, FlexDirection, FlexWrap, JustifyContent, Position,
        Visibility,
    };

    #[test]
    /// # Panics
    /// Panics if an all-initial property map does not resolve to `ComputedStyle::default()`.
    fn empty_map_resolves_to_initial_style() {
        let resolved = ComputedStyle::resolve(&PropertyMap::new());
        assert_eq!(resolved.ok(), Some(ComputedStyle::default()));
    }

    #[test]
    /// # Panics
    /// Panics if container and item keywords are not mapped to their enums.
    fn keywords_resolve_to_closed_enums() {
        let map = PropertyMap::new()
            .with("flex-direction", "column")
            .with("flex-wrap", "wrap-reverse")
            .with("justify-content", "space-between")
            .with("align-content", "center")
            .with("align-self", "baseline")
            .with("visibility", "collapse")
            .with("position", "absolute")
            .with("width", "120px")
            .with("min-height", "auto")
            .with("max-width", "300px")
            .with("margin-left", "auto")
            .with("flex-grow", "2");
        let style = ComputedStyle::resolve(&map).unwrap_or_default();
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.flex_wrap, FlexWrap::WrapReverse);
        assert_eq!(style.justify_content, JustifyContent::SpaceBetween);
        assert_eq!(style.align_content, AlignContent::Center);
        assert_eq!(style.align_self, AlignSelf::Baseline);
        assert_eq!(style.visibility, Visibility::Collapse);
        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.width, SizeValue::Px(120.0));
        assert_eq!(style.min_height, SizeValue::Auto);
        assert_eq!(style.max_width, MaxSizeValue::Px(300.0));
        assert_eq!(style.margin.left, MarginValue::Auto);
        assert!((style.flex_grow - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if an unknown keyword does not produce an error naming the property.
    fn unknown_keyword_reports_property() {
        let map = PropertyMap::new().with("justify-content", "sideways");
        let message = ComputedStyle::resolve(&map)
            .err()
            .map(|err| format!("{err:#}"))
            .unwrap_or_default();
        assert!(message.contains("justify-content"), "got: {message}");
    }

    #[test]
    /// # Panics
    /// Panics if a negative flex factor is accepted.
    fn negative_flex_factor_is_rejected() {
        let map = PropertyMap::new().with("flex-shrink", "-1");
        assert!(ComputedStyle::resolve(&map).ok().is_none());
    }

    #[test]
    /// # Panics
    /// Panics if sizing keywords or percentages fail resolution instead of becoming indefinite.
    fn sizing_keywords_and_percentages_are_indefinite() {
        let map = PropertyMap::new()
            .with("flex-basis", "content")
            .with("width", "50%")
            .with("height", "max-content")
            .with("min-width", "min-content")
            .with("max-width", "fit-content")
            .with("max-height", "75%");
        let resolved = ComputedStyle::resolve(&map).map_err(|err| format!("{err:#}"));
        assert_eq!(resolved.as_ref().err(), None);
        let style = resolved.unwrap_or_default();
        assert_eq!(style.flex_basis, SizeValue::Indefinite);
        assert_eq!(style.width, SizeValue::Indefinite);
        assert_eq!(style.height, SizeValue::Indefinite);
        // Only the literal `auto` requests the automatic minimum.
        assert_eq!(style.min_width, SizeValue::Indefinite);
        assert!(!style.min_width.is_auto());
        assert_eq!(style.max_width, MaxSizeValue::None);
        assert_eq!(style.max_height, MaxSizeValue::None);
    }

    #[test]
    /// # Panics
    /// Panics if keyword edges or flex factors are not read as zero.
    fn keyword_edges_and_factors_read_as_zero() {
        let map = PropertyMap::new()
            .with("padding-top", "10%")
            .with("border-left-width", "thin")
            .with("margin-right", "5%")
            .with("flex-grow", "inherit")
            .with("flex-shrink", "initial");
        let resolved = ComputedStyle::resolve(&map).map_err(|err| format!("{err:#}"));
        assert_eq!(resolved.as_ref().err(), None);
        let style = resolved.unwrap_or_default();
        assert!(style.padding.top.abs() < f32::EPSILON);
        assert!(style.border_width.left.abs() < f32::EPSILON);
        assert_eq!(style.margin.right, MarginValue::Px(0.0));
        assert!(style.flex_grow.abs() < f32::EPSILON);
        assert!(style.flex_shrink.abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if unlisted `display` values or `position: sticky` fail resolution or leave flow.
    fn unlisted_display_and_sticky_stay_in_flow() {
        for display in ["grid", "list-item", "flow-root"] {
            let map = PropertyMap::new()
                .with("display", display)
                .with("position", "sticky");
            let resolved = ComputedStyle::resolve(&map).map_err(|err| format!("{err:#}"));
            assert_eq!(resolved.as_ref().err(), None, "{display}");
            let style = resolved.unwrap_or_default();
            assert_eq!(style.display, Display::Block, "{display}");
            assert_eq!(style.position, Position::Sticky);
        }
        let hidden = ComputedStyle::resolve(&PropertyMap::new().with("display", "none"));
        assert_eq!(hidden.ok().map(|style| style.display), Some(Display::None));
    }
}
