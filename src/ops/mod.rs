//! Built-in operation catalog
//!
//! Every operation checks arity before popping, so a failed operation
//! leaves the stack exactly as it found it.

mod arith;
mod constants;
mod math;
mod stack;
mod stats;

use crate::eval::{EvalError, Stack};
use crate::registry::Registry;

/// Register the whole catalog, in help-listing order
pub(crate) fn register_all(registry: &mut Registry) {
    arith::register(registry);
    math::register(registry);
    stats::register(registry);
    stack::register(registry);
    constants::register(registry);
}

/// Fail with `StackTooSmall` unless at least `needed` values are present
pub(crate) fn require(stack: &Stack, op: &str, needed: usize) -> Result<(), EvalError> {
    if stack.len() < needed {
        return Err(EvalError::StackTooSmall {
            op: op.to_string(),
            needed,
            available: stack.len(),
        });
    }
    Ok(())
}

/// Pop x, push f(x)
pub(crate) fn unary(
    stack: &mut Stack,
    op: &str,
    f: impl FnOnce(f64) -> f64,
) -> Result<(), EvalError> {
    require(stack, op, 1)?;
    let x = stack.pop()?;
    stack.push(f(x));
    Ok(())
}

/// Pop x, pop y, push f(y, x)
pub(crate) fn binary(
    stack: &mut Stack,
    op: &str,
    f: impl FnOnce(f64, f64) -> f64,
) -> Result<(), EvalError> {
    require(stack, op, 2)?;
    let x = stack.pop()?;
    let y = stack.pop()?;
    stack.push(f(y, x));
    Ok(())
}
