//! Basic function library available to every template.

mod keys;

pub use keys::KeysFunction;

use crate::{wrong_arg_count, FunctionResult};

/// The only argument of a single-argument call.
///
/// The registry validates arity before dispatch; this keeps a direct call
/// with the wrong count an error instead of a panic.
fn single_arg<'a, T>(function: &'static str, args: &'a [T]) -> FunctionResult<&'a T> {
    match args {
        [arg] => Ok(arg),
        _ => Err(wrong_arg_count(function, &[1], args.len())),
    }
}
