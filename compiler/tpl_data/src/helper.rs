//! Value construction for template functions.

use crate::Value;

/// Builds fresh runtime values from Rust data.
///
/// Functions receive a `ValueHelper` through their constructor rather than
/// building heap values ad hoc, so every value a function hands back to the
/// renderer goes through one conversion path.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueHelper;

impl ValueHelper {
    /// Create a helper.
    pub const fn new() -> Self {
        ValueHelper
    }

    /// Convert a Rust value into a runtime value.
    #[inline]
    pub fn convert(self, value: impl Into<Value>) -> Value {
        value.into()
    }

    /// Build a new list value from any iterable of convertible items.
    ///
    /// The list preserves the iterator's order and owns fresh storage; it
    /// never aliases the source collection.
    pub fn new_list_from_iter<I>(self, items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}
