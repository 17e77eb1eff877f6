//! Configuration for the JS source backend.

use crate::RuntimeHelper;

/// Runtime namespace used when none is configured.
pub const DEFAULT_RUNTIME_NAMESPACE: &str = "tpl";

/// Options describing the environment generated code will run in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsSrcOptions {
    /// Global object the support library hangs its helpers on.
    ///
    /// An empty namespace means helpers are free functions.
    runtime_namespace: String,
}

impl JsSrcOptions {
    /// Options with the default runtime namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different runtime namespace.
    #[must_use]
    pub fn with_runtime_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.runtime_namespace = namespace.into();
        self
    }

    /// The configured runtime namespace.
    pub fn runtime_namespace(&self) -> &str {
        &self.runtime_namespace
    }

    /// Fully qualified name of a runtime helper, e.g. `tpl.$$getMapKeys`.
    pub fn runtime_helper(&self, helper: RuntimeHelper) -> String {
        if self.runtime_namespace.is_empty() {
            helper.name().to_string()
        } else {
            format!("{}.{}", self.runtime_namespace, helper.name())
        }
    }
}

impl Default for JsSrcOptions {
    fn default() -> Self {
        JsSrcOptions {
            runtime_namespace: DEFAULT_RUNTIME_NAMESPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
