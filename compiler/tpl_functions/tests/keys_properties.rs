//! Property-based tests for the `keys` function.
//!
//! These tests generate arbitrary maps and verify, through the registry:
//! 1. Key-set equality: `keys(m)` holds exactly the keys of `m`, each once
//! 2. Non-map arguments fail with a type error
//! 3. JS generation is a pure function of its input fragment
//! 4. Concurrent renders can share one registry

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use rayon::prelude::*;
use tpl_data::Value;
use tpl_functions::{init_tracing, FunctionErrorKind, FunctionRegistry};
use tpl_jssrc::{JsExpr, JsSrcOptions, Precedence};

// -- Strategies --

/// Generate a map with string keys and scalar values.
fn map_strategy() -> impl Strategy<Value = HashMap<String, Value>> {
    prop::collection::hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,12}", scalar_strategy(), 0..32)
}

/// Generate a scalar value.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,8}".prop_map(|s| Value::string(s)),
    ]
}

/// Generate a value that is not a map.
fn non_map_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar_strategy(),
        prop::collection::vec(scalar_strategy(), 0..8).prop_map(Value::list),
    ]
}

/// Generate a JS identifier path such as `opt_data.a.b`.
fn js_path_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,8}(\\.[a-z][a-zA-Z0-9]{0,8}){0,3}")
        .expect("valid regex")
}

fn key_strings(result: &Value) -> Vec<String> {
    result
        .as_list()
        .expect("keys() returns a list")
        .iter()
        .map(|key| key.as_str().expect("map keys are strings").to_string())
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn keys_yields_exactly_the_key_set(entries in map_strategy()) {
        let registry = FunctionRegistry::default();
        let expected: BTreeSet<String> = entries.keys().cloned().collect();

        let result = registry.call("keys", &[Value::map(entries)]).unwrap();
        let keys = key_strings(&result);
        let actual: BTreeSet<String> = keys.iter().cloned().collect();

        prop_assert_eq!(keys.len(), expected.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn keys_rejects_every_non_map(value in non_map_strategy()) {
        let registry = FunctionRegistry::default();
        let got = value.type_name();
        let err = registry.call("keys", &[value]).unwrap_err();
        let is_type_error = matches!(
            err.kind,
            FunctionErrorKind::InvalidArgumentType { got: g, .. } if g == got
        );
        prop_assert!(is_type_error);
    }

    #[test]
    fn keys_emit_wraps_fragment_in_helper(path in js_path_strategy()) {
        let registry = FunctionRegistry::default();
        let opts = JsSrcOptions::new();
        let arg = JsExpr::new(path.clone(), Precedence::MEMBER);

        let first = registry.emit_js("keys", std::slice::from_ref(&arg), &opts).unwrap();
        let second = registry.emit_js("keys", std::slice::from_ref(&arg), &opts).unwrap();

        prop_assert_eq!(first.text(), format!("tpl.$$getMapKeys({path})"));
        prop_assert_eq!(first.precedence(), Precedence::MAX);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn keys_is_safe_across_render_threads() {
    init_tracing();

    let registry = FunctionRegistry::default();
    let map = Value::map((0..100).map(|i| (format!("k{i}"), Value::Int(i))).collect());
    let expected: BTreeSet<String> = (0..100).map(|i| format!("k{i}")).collect();

    let results: Vec<BTreeSet<String>> = (0..64)
        .into_par_iter()
        .map(|_| {
            let result = registry.call("keys", std::slice::from_ref(&map)).unwrap();
            key_strings(&result).into_iter().collect()
        })
        .collect();

    assert_eq!(results.len(), 64);
    assert!(results.iter().all(|keys| *keys == expected));
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
