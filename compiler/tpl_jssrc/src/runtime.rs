//! Intrinsics provided by the generated-code support library.

/// A helper function the JS runtime library is expected to define.
///
/// Generated code calls these by name; they are never emitted by this
/// backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeHelper {
    /// Returns an array of a map's keys, in no particular order.
    GetMapKeys,
}

impl RuntimeHelper {
    /// Unqualified helper name.
    pub const fn name(self) -> &'static str {
        match self {
            RuntimeHelper::GetMapKeys => "$$getMapKeys",
        }
    }
}
