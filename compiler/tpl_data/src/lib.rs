//! Runtime data model for template rendering.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`)
//! - `ValueHelper`, the factory functions use to build fresh values
//!
//! Heap-backed values are shared through `Arc`, so a `Value` can be handed
//! to any number of render threads without copying.

mod helper;
mod value;

pub use helper::ValueHelper;
pub use value::{Heap, Value};
