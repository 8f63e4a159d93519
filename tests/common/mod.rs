//! Common test utilities for rpncalc integration tests

pub use rpncalc::{Engine, EvalError, Stack};

/// Evaluate one line on a fresh engine and return the rendered stack
pub fn eval(input: &str) -> Result<String, String> {
    let stack = rpncalc::eval(input).map_err(|e| e.to_string())?;
    Ok(stack.render())
}

/// Evaluate one line on a fresh engine and return the raw values
#[allow(dead_code)]
pub fn eval_values(input: &str) -> Result<Vec<f64>, EvalError> {
    rpncalc::eval(input).map(|s| s.as_slice().to_vec())
}

/// Run several lines through one engine, stopping at the first error
#[allow(dead_code)]
pub fn session(lines: &[&str]) -> Result<Engine, EvalError> {
    let mut engine = Engine::new();
    for line in lines {
        engine.evaluate_batch(line)?;
    }
    Ok(engine)
}
