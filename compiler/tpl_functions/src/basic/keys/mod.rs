//! `keys` function implementation.
//!
//! Gets the keys of a map as a list, e.g. for iterating a map in a template:
//!
//! ```text
//! {for $key in keys($myMap)} ... {/for}
//! ```
//!
//! The list has no ordering guarantee. The order may differ between runs
//! and between backends, and templates must not depend on it.

use tpl_data::{Value, ValueHelper};
use tpl_jssrc::{JsExpr, JsSrcOptions, RuntimeHelper};

use super::single_arg;
use crate::{invalid_argument_type, FunctionResult, TemplateFunction};

/// The `keys` function returns the keys of a map.
///
/// Syntax: `keys(map)`
/// Type: `keys(map<K, V>) -> list<K>`
#[derive(Clone, Copy, Debug, Default)]
pub struct KeysFunction {
    helper: ValueHelper,
}

impl KeysFunction {
    /// Create the function with the helper used to build its result lists.
    pub const fn new(helper: ValueHelper) -> Self {
        KeysFunction { helper }
    }
}

impl TemplateFunction for KeysFunction {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn valid_arg_counts(&self) -> &'static [usize] {
        &[1]
    }

    fn evaluate(&self, args: &[Value]) -> FunctionResult {
        let arg = single_arg(self.name(), args)?;
        let Some(map) = arg.as_map() else {
            return Err(invalid_argument_type(self.name(), "map", arg));
        };
        Ok(self.helper.new_list_from_iter(map.keys().cloned()))
    }

    fn emit_js(&self, args: &[JsExpr], opts: &JsSrcOptions) -> FunctionResult<JsExpr> {
        let arg = single_arg(self.name(), args)?;
        let helper = opts.runtime_helper(RuntimeHelper::GetMapKeys);
        Ok(JsExpr::call(&helper, std::slice::from_ref(arg)))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
