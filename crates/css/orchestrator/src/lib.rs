//! Style model of the layout engine and the boundary through which hosts supply it.
//!
//! A host cascade answers [`StyleResolver::computed_value`] queries; [`ComputedStyle::resolve`]
//! converts those answers once into the closed enums layout matches on.

pub mod computed_value;
mod style;
pub mod style_model;

pub use computed_value::{ComputedValue, PropertyMap, StyleResolver, initial_value};
pub use style_model::ComputedStyle;
