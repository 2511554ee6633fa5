//! Coffee brew ratio engine.
//!
//! Resolves a baseline recipe from the static reference table, shifts its
//! ratio by grind deviation, and derives the display quantities for a
//! caller's [`BrewRequest`].

pub mod brewing;
pub mod conversions;
pub mod system;
pub mod types;

pub use brewing::*;
pub use conversions::*;
pub use system::*;
pub use types::*;
