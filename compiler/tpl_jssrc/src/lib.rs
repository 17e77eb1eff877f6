//! JavaScript Source Backend Primitives
//!
//! Template functions that support the client-side backend do not evaluate
//! anything at compile time. They receive their arguments as already
//! rendered JS fragments and return a new fragment that is spliced into the
//! enclosing generated expression.
//!
//! # Architecture
//!
//! ```text
//! argument fragments (JsExpr)
//!        ↓
//!   TemplateFunction::emit_js  (+ JsSrcOptions for runtime helper names)
//!        ↓
//!   result fragment (JsExpr)  → spliced by the host, parenthesized via `protect`
//! ```

mod expr;
mod options;
mod precedence;
mod runtime;

pub use expr::JsExpr;
pub use options::{JsSrcOptions, DEFAULT_RUNTIME_NAMESPACE};
pub use precedence::Precedence;
pub use runtime::RuntimeHelper;
