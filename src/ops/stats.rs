use super::require;
use crate::eval::{EvalError, Stack};
use crate::registry::{Operation, Registry};

pub(super) fn register(r: &mut Registry) {
    r.register(Operation::new("sum", "sums all values on the stack", sum), &[]);
    r.register(
        Operation::new("mean", "takes the mean of all the values on the stack", mean),
        &[],
    );
}

/// Pops from the top down. An empty stack sums to 0.
fn sum(stack: &mut Stack) -> Result<(), EvalError> {
    let mut total = 0.0;
    while !stack.is_empty() {
        total += stack.pop()?;
    }
    stack.push(total);
    Ok(())
}

fn mean(stack: &mut Stack) -> Result<(), EvalError> {
    require(stack, "mean", 1)?;
    let count = stack.len() as f64;
    let mut total = 0.0;
    while !stack.is_empty() {
        total += stack.pop()?;
    }
    stack.push(total / count);
    Ok(())
}
