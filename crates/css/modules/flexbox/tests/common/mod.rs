//! Shared fixtures for flex layout integration tests.

#![allow(dead_code, reason = "Each test crate uses a different subset of the helpers")]

use css_flexbox::{ContentBox, FlexContainer, FlexLayout, GeometrySetter, MeasurableChild};
use css_orchestrator::style_model::{ComputedStyle, Display, FlexDirection, FlexWrap};

/// Install a test logger once per test binary.
pub fn init_logging() {
    #[allow(
        clippy::let_underscore_must_use,
        reason = "A logger may already be installed by another test"
    )]
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A leaf child with fixed preferred sizes that records the geometry it receives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingChild {
    pub width: f32,
    pub height: f32,
    pub baseline: f32,
    pub geometry: Option<ContentBox>,
    pub layout_calls: usize,
}

impl RecordingChild {
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }
}

impl MeasurableChild for RecordingChild {
    fn preferred_width(&self) -> f32 {
        self.width
    }

    fn preferred_height(&self, _width: f32) -> f32 {
        self.height
    }

    fn first_baseline_offset(&self, _width: f32) -> f32 {
        self.baseline
    }

    fn last_baseline_offset(&self, _width: f32) -> f32 {
        self.baseline
    }
}

impl GeometrySetter for RecordingChild {
    fn set_geometry(&mut self, content_box: ContentBox) {
        self.geometry = Some(content_box);
    }

    fn layout_subviews(&mut self) {
        self.layout_calls += 1;
    }
}

/// A child that is itself a flex container; measuring it runs a nested layout.
#[derive(Clone, Debug, Default)]
pub struct NestedFlex {
    pub style: ComputedStyle,
    pub child_styles: Vec<ComputedStyle>,
    pub children: Vec<RecordingChild>,
}

impl MeasurableChild for NestedFlex {
    fn preferred_width(&self) -> f32 {
        FlexLayout::new().preferred_width(
            &FlexContainer::new(self.style.clone()),
            &self.child_styles,
            &self.children,
        )
    }

    fn preferred_height(&self, width: f32) -> f32 {
        FlexLayout::new().preferred_height(
            &FlexContainer::new(self.style.clone()),
            width,
            &self.child_styles,
            &self.children,
        )
    }
}

pub fn flex_style(direction: FlexDirection, wrap: FlexWrap) -> ComputedStyle {
    ComputedStyle {
        display: Display::Flex,
        flex_direction: direction,
        flex_wrap: wrap,
        ..ComputedStyle::default()
    }
}

/// A row container with the given content size.
pub fn row(width: Option<f32>, height: Option<f32>) -> FlexContainer {
    FlexContainer::new(flex_style(FlexDirection::Row, FlexWrap::NoWrap))
        .with_content_size(width, height)
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}

/// Assert a recorded content box within tolerance.
pub fn assert_box(child: &RecordingChild, expected: ContentBox) {
    assert!(child.geometry.is_some(), "child was never given a geometry");
    let Some(actual) = child.geometry else {
        return;
    };
    assert!(
        approx(actual.x, expected.x)
            && approx(actual.y, expected.y)
            && approx(actual.width, expected.width)
            && approx(actual.height, expected.height),
        "got {actual:?}, want {expected:?}"
    );
}
