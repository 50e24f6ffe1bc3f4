//! Computed style consumed by flex layout.
//!
//! Every keyword is a closed enum so layout code matches exhaustively and never compares strings.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    Flex,
    InlineFlex,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    /// In flow for flex layout; sticky offsets are not applied.
    Sticky,
}

/// Spec: <https://www.w3.org/TR/css-display-3/#visibility>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    /// Flex items with `visibility: collapse` keep a cross-axis strut but no main-axis space.
    Collapse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignContent {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

/// `align-self`; `Auto` defers to the container's `align-items`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

impl AlignSelf {
    /// Resolve `auto` against the container's `align-items`.
    #[inline]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
        }
    }
}

/// `width`, `height`, `min-*` and `flex-basis`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SizeValue {
    /// The literal `auto` keyword.
    #[default]
    Auto,
    Px(f32),
    /// Any other keyword or a percentage (`content`, `min-content`, `50%`, ...).
    Indefinite,
}

impl SizeValue {
    /// The length when definite, `None` for keywords and percentages.
    #[inline]
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Px(pixels) => Some(pixels),
            Self::Auto | Self::Indefinite => None,
        }
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// `max-width` / `max-height`: an absolute length in px, or `None` for `none` and any other
/// keyword or percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaxSizeValue {
    #[default]
    None,
    Px(f32),
}

impl MaxSizeValue {
    #[inline]
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Px(pixels) => Some(pixels),
            Self::None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginValue {
    Px(f32),
    Auto,
}

impl Default for MarginValue {
    #[inline]
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl MarginValue {
    /// Used length of the margin before auto-margin distribution (`auto` counts as zero).
    #[inline]
    pub const fn px_or_zero(self) -> f32 {
        match self {
            Self::Px(pixels) => pixels,
            Self::Auto => 0.0,
        }
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarginEdges {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    // Box generation and eligibility
    pub display: Display,
    pub position: Position,
    pub visibility: Visibility,
    // Dimensions
    pub width: SizeValue,
    pub height: SizeValue,
    pub min_width: SizeValue,
    pub min_height: SizeValue,
    pub max_width: MaxSizeValue,
    pub max_height: MaxSizeValue,
    // Box model
    pub margin: MarginEdges,
    pub border_width: Edges,
    pub padding: Edges,
    // Flex container
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    pub align_items: AlignItems,
    // Flex item
    pub flex_basis: SizeValue,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub align_self: AlignSelf,
}

impl Default for ComputedStyle {
    /// CSS initial values.
    #[inline]
    fn default() -> Self {
        Self {
            display: Display::default(),
            position: Position::default(),
            visibility: Visibility::default(),
            width: SizeValue::Auto,
            height: SizeValue::Auto,
            min_width: SizeValue::Auto,
            min_height: SizeValue::Auto,
            max_width: MaxSizeValue::None,
            max_height: MaxSizeValue::None,
            margin: MarginEdges::default(),
            border_width: Edges::default(),
            padding: Edges::default(),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            justify_content: JustifyContent::default(),
            align_content: AlignContent::default(),
            align_items: AlignItems::default(),
            flex_basis: SizeValue::Auto,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            align_self: AlignSelf::default(),
        }
    }
}
