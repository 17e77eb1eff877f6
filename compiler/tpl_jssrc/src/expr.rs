//! Generated JavaScript expression fragments.

use std::borrow::Cow;
use std::fmt;

use crate::Precedence;

/// A fragment of generated JavaScript plus the precedence of its top-level
/// operator.
///
/// Fragments are immutable. The precedence lets the host splice a fragment
/// into a larger expression and add parentheses only where the surrounding
/// operator binds tighter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsExpr {
    text: String,
    precedence: Precedence,
}

impl JsExpr {
    /// Create a fragment from its source text and precedence.
    pub fn new(text: impl Into<String>, precedence: Precedence) -> Self {
        JsExpr {
            text: text.into(),
            precedence,
        }
    }

    /// Create a fragment that never needs parentheses (identifiers, literals).
    pub fn atom(text: impl Into<String>) -> Self {
        JsExpr::new(text, Precedence::MAX)
    }

    /// Source text of the fragment.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Precedence of the fragment's top-level operator.
    #[inline]
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Take the source text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Source text suitable for a context that requires at least `min`.
    ///
    /// Parenthesized when this fragment binds looser than `min`.
    pub fn protect(&self, min: Precedence) -> Cow<'_, str> {
        if self.precedence < min {
            Cow::Owned(format!("({})", self.text))
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    /// Build a call fragment `callee(arg, ...)`.
    ///
    /// Arguments are protected against the comma operator; the call itself
    /// has maximal precedence.
    pub fn call(callee: &str, args: &[JsExpr]) -> JsExpr {
        let arg_texts: Vec<_> = args
            .iter()
            .map(|arg| arg.protect(Precedence::ASSIGNMENT))
            .collect();
        JsExpr::atom(format!("{}({})", callee, arg_texts.join(", ")))
    }
}

impl fmt::Display for JsExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
