use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_namespace() {
    let opts = JsSrcOptions::new();
    assert_eq!(opts.runtime_namespace(), DEFAULT_RUNTIME_NAMESPACE);
    assert_eq!(
        opts.runtime_helper(RuntimeHelper::GetMapKeys),
        "tpl.$$getMapKeys"
    );
}

#[test]
fn test_custom_namespace() {
    let opts = JsSrcOptions::new().with_runtime_namespace("app.rt");
    assert_eq!(
        opts.runtime_helper(RuntimeHelper::GetMapKeys),
        "app.rt.$$getMapKeys"
    );
}

#[test]
fn test_empty_namespace_uses_bare_helper() {
    let opts = JsSrcOptions::new().with_runtime_namespace("");
    assert_eq!(opts.runtime_helper(RuntimeHelper::GetMapKeys), "$$getMapKeys");
}
