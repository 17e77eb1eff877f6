//! Error types for template function calls.
//!
//! Factory functions (`invalid_argument_type()`, `wrong_arg_count()`,
//! `unknown_function()`) are the public way to build errors; they are
//! marked `#[cold]` since every call site is on a failure path.

use tpl_data::Value;

/// Result of a template function call.
pub type FunctionResult<T = Value> = Result<T, FunctionError>;

/// Typed error category for function calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FunctionErrorKind {
    /// The argument does not have the capability the function needs.
    ///
    /// Signals template misuse; the host aborts the current render.
    #[error("{function}() expects a {expected} argument, got {got}")]
    InvalidArgumentType {
        function: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// The call site passes an argument count the function does not accept.
    #[error("{function}() expects {}, got {got}", describe_arity(.expected))]
    ArityMismatch {
        function: &'static str,
        expected: &'static [usize],
        got: usize,
    },

    /// No function is registered under this name.
    #[error("unknown function: {name}()")]
    UnknownFunction { name: String },
}

/// Error raised by a template function call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct FunctionError {
    /// Structured error category.
    pub kind: FunctionErrorKind,
    /// Secondary information for the template author.
    pub notes: Vec<String>,
}

impl FunctionError {
    fn from_kind(kind: FunctionErrorKind) -> Self {
        FunctionError {
            kind,
            notes: Vec::new(),
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// "1 argument", "2 arguments", "1 or 2 arguments".
fn describe_arity(counts: &[usize]) -> String {
    let (last, rest) = match counts.split_last() {
        Some(parts) => parts,
        None => return "no valid argument count".to_string(),
    };
    let noun = if rest.is_empty() && *last == 1 {
        "argument"
    } else {
        "arguments"
    };
    if rest.is_empty() {
        return format!("{last} {noun}");
    }
    let head: Vec<_> = rest.iter().map(ToString::to_string).collect();
    format!("{} or {last} {noun}", head.join(", "))
}

// Factory functions

/// Argument lacks the required capability.
#[cold]
pub fn invalid_argument_type(
    function: &'static str,
    expected: &'static str,
    got: &Value,
) -> FunctionError {
    FunctionError::from_kind(FunctionErrorKind::InvalidArgumentType {
        function,
        expected,
        got: got.type_name(),
    })
}

/// Call with an argument count outside the function's valid set.
#[cold]
pub fn wrong_arg_count(
    function: &'static str,
    expected: &'static [usize],
    got: usize,
) -> FunctionError {
    FunctionError::from_kind(FunctionErrorKind::ArityMismatch {
        function,
        expected,
        got,
    })
}

/// No function with this name.
#[cold]
pub fn unknown_function(name: &str) -> FunctionError {
    FunctionError::from_kind(FunctionErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}
