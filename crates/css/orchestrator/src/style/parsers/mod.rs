//! Property resolvers organized by category.
//!
//! Each submodule handles a specific category of CSS properties and writes into the
//! computed style.

pub mod dimensions;
pub mod edges;
pub mod flex;
pub mod layout;
