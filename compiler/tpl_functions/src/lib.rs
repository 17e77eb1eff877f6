//! Built-in template functions.
//!
//! This crate provides:
//! - The function plugin contract (`TemplateFunction`)
//! - Function error types (`FunctionError`, `FunctionResult`)
//! - `FunctionRegistry`, which resolves calls by name and validates arity
//! - The basic function library (`keys`)
//!
//! # Backends
//!
//! Every function implements both backends the renderer can target:
//! - **Interpreter**: `evaluate()` runs over runtime `Value`s
//! - **JS source**: `emit_js()` turns argument fragments into a result fragment
//!
//! The host picks the method for the active backend. Arity is checked by
//! the registry before either method runs.

mod basic;
mod errors;
mod registry;

use std::sync::Once;

use tpl_data::Value;
use tpl_jssrc::{JsExpr, JsSrcOptions};

pub use basic::KeysFunction;
pub use errors::{
    invalid_argument_type, unknown_function, wrong_arg_count, FunctionError, FunctionErrorKind,
    FunctionResult,
};
pub use registry::FunctionRegistry;

/// A function callable from templates.
///
/// # Adding a Function
/// 1. Create a module under `basic/`
/// 2. Implement `TemplateFunction`
/// 3. Register it in `FunctionRegistry::new()`
///
/// Implementations must be stateless apart from configuration fixed at
/// construction, since one instance serves every concurrent render.
pub trait TemplateFunction: Send + Sync {
    /// Name used to look the function up from template source.
    fn name(&self) -> &'static str;

    /// Argument counts this function accepts.
    fn valid_arg_counts(&self) -> &'static [usize];

    /// Whether `count` arguments is a valid call.
    fn accepts_arg_count(&self, count: usize) -> bool {
        self.valid_arg_counts().contains(&count)
    }

    /// Whether the function has no side effects.
    ///
    /// Default: pure.
    fn is_pure(&self) -> bool {
        true
    }

    /// Evaluate the function in the interpreter.
    fn evaluate(&self, args: &[Value]) -> FunctionResult;

    /// Generate a JS expression computing the function at render time.
    fn emit_js(&self, args: &[JsExpr], opts: &JsSrcOptions) -> FunctionResult<JsExpr>;
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=tpl_functions=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
