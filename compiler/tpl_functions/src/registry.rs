//! Function registry for resolving template calls by name.

use rustc_hash::FxHashMap;
use tpl_data::{Value, ValueHelper};
use tpl_jssrc::{JsExpr, JsSrcOptions};

use crate::basic::KeysFunction;
use crate::{unknown_function, wrong_arg_count, FunctionResult, TemplateFunction};

/// Registry mapping function names to implementations.
///
/// The registry is the host side of the plugin contract: it rejects unknown
/// names and invalid argument counts before a function ever runs. It holds
/// no mutable state after construction and can be shared across render
/// threads by reference.
pub struct FunctionRegistry {
    functions: FxHashMap<&'static str, Box<dyn TemplateFunction>>,
}

impl FunctionRegistry {
    /// Create a registry with the basic function library registered.
    ///
    /// `helper` is handed to every function that builds runtime values.
    pub fn new(helper: ValueHelper) -> Self {
        let mut registry = Self::empty();
        registry.register(KeysFunction::new(helper));
        registry
    }

    /// Create a registry with no functions.
    pub fn empty() -> Self {
        FunctionRegistry {
            functions: FxHashMap::default(),
        }
    }

    /// Register a function under its own name.
    ///
    /// Returns the function previously registered under that name, if any.
    pub fn register<F>(&mut self, function: F) -> Option<Box<dyn TemplateFunction>>
    where
        F: TemplateFunction + 'static,
    {
        let name = function.name();
        tracing::trace!(function = name, "registering template function");
        self.functions.insert(name, Box::new(function))
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&dyn TemplateFunction> {
        self.functions.get(name).map(Box::as_ref)
    }

    /// Whether a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Resolve `name` and validate a call with `count` arguments.
    pub fn check_arity(&self, name: &str, count: usize) -> FunctionResult<&dyn TemplateFunction> {
        let Some(function) = self.get(name) else {
            tracing::debug!(function = name, "rejected call to unknown function");
            return Err(unknown_function(name)
                .with_note(format!("available functions: {}", self.names().join(", "))));
        };
        if !function.accepts_arg_count(count) {
            tracing::debug!(
                function = name,
                got = count,
                "rejected call with invalid argument count"
            );
            return Err(wrong_arg_count(
                function.name(),
                function.valid_arg_counts(),
                count,
            ));
        }
        Ok(function)
    }

    /// Call a function in the interpreter.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value]) -> FunctionResult {
        self.check_arity(name, args.len())?.evaluate(args)
    }

    /// Generate JS source for a call.
    #[tracing::instrument(level = "debug", skip(self, args, opts), fields(argc = args.len()))]
    pub fn emit_js(
        &self,
        name: &str,
        args: &[JsExpr],
        opts: &JsSrcOptions,
    ) -> FunctionResult<JsExpr> {
        self.check_arity(name, args.len())?.emit_js(args, opts)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(ValueHelper::new())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
