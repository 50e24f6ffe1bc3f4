//! The style-resolver boundary: computed values looked up by property name.
//!
//! Hosts expose their cascade through [`StyleResolver`]; [`crate::ComputedStyle::resolve`]
//! turns the answers into closed enums once, so layout never inspects keyword strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single computed value as produced by a style cascade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawValue", into = "RawValue")]
pub enum ComputedValue {
    /// An absolute length in CSS px.
    Length(f32),
    /// A plain number (e.g. `flex-grow`).
    Number(f32),
    /// A keyword such as `auto`, `row` or `space-between`.
    Keyword(String),
}

impl ComputedValue {
    #[inline]
    pub const fn is_length(&self) -> bool {
        matches!(self, Self::Length(_))
    }

    /// ASCII case-insensitive keyword match.
    #[inline]
    pub fn is_keyword(&self, name: &str) -> bool {
        match self {
            Self::Keyword(keyword) => keyword.eq_ignore_ascii_case(name),
            Self::Length(_) | Self::Number(_) => false,
        }
    }

    /// Numeric payload of a length or number; keywords read as `0.0`.
    #[inline]
    pub const fn number(&self) -> f32 {
        match self {
            Self::Length(value) | Self::Number(value) => *value,
            Self::Keyword(_) => 0.0,
        }
    }

    #[inline]
    pub fn keyword(name: &str) -> Self {
        Self::Keyword(name.to_owned())
    }

    /// Parse a textual computed value: `12px` is a length, `1.5` a number, anything else a
    /// keyword.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(px_suffix_str) = trimmed.strip_suffix("px")
            && let Ok(pixels) = px_suffix_str.trim().parse::<f32>()
        {
            return Self::Length(pixels);
        }
        trimmed.parse::<f32>().map_or_else(
            |_| Self::Keyword(trimmed.to_ascii_lowercase()),
            Self::Number,
        )
    }
}

/// Serialized shape of a [`ComputedValue`]: a bare JSON number or a CSS text token.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f32),
    Text(String),
}

impl From<RawValue> for ComputedValue {
    #[inline]
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Number(number) => Self::Number(number),
            RawValue::Text(text) => Self::parse(&text),
        }
    }
}

impl From<ComputedValue> for RawValue {
    #[inline]
    fn from(value: ComputedValue) -> Self {
        match value {
            ComputedValue::Number(number) => Self::Number(number),
            ComputedValue::Length(pixels) => Self::Text(format!("{pixels}px")),
            ComputedValue::Keyword(keyword) => Self::Text(keyword),
        }
    }
}

/// Capability to look up computed values by CSS property name.
pub trait StyleResolver {
    fn computed_value(&self, property_name: &str) -> ComputedValue;
}

/// CSS initial value for the properties consumed by flex layout.
pub fn initial_value(property_name: &str) -> ComputedValue {
    match property_name {
        "flex-direction" => ComputedValue::keyword("row"),
        "flex-wrap" => ComputedValue::keyword("nowrap"),
        "width" | "height" | "min-width" | "min-height" | "flex-basis" => {
            ComputedValue::keyword("auto")
        }
        "max-width" | "max-height" => ComputedValue::keyword("none"),
        "flex-grow" => ComputedValue::Number(0.0),
        "flex-shrink" => ComputedValue::Number(1.0),
        "justify-content" => ComputedValue::keyword("flex-start"),
        "align-items" | "align-content" => ComputedValue::keyword("stretch"),
        "align-self" => ComputedValue::keyword("auto"),
        "visibility" => ComputedValue::keyword("visible"),
        "position" => ComputedValue::keyword("static"),
        "display" => ComputedValue::keyword("inline"),
        // margins, border widths, padding
        _ => ComputedValue::Length(0.0),
    }
}

/// A `HashMap`-backed resolver; unset properties report their initial value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    values: HashMap<String, ComputedValue>,
}

impl PropertyMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&mut self, property_name: &str, value: ComputedValue) {
        self.values.insert(property_name.to_owned(), value);
    }

    /// Builder-style [`Self::set`] taking textual values (`"10px"`, `"auto"`, `"1"`).
    #[inline]
    #[must_use]
    pub fn with(mut self, property_name: &str, value: &str) -> Self {
        self.set(property_name, ComputedValue::parse(value));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StyleResolver for PropertyMap {
    #[inline]
    fn computed_value(&self, property_name: &str) -> ComputedValue {
        self.values
            .get(property_name)
            .cloned()
            .unwrap_or_else(|| initial_value(property_name))
    }
}
