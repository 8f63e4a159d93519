//! rpncalc - a Reverse Polish Notation calculator
//!
//! # Overview
//!
//! Numbers push themselves onto a stack; operations pop their operands and
//! push the result. There is no precedence and no parentheses.
//!
//! ```text
//! 2 3 +            # Stack: [5]
//! 10 2 /           # Stack: [5]   (pops 2, then 10: 10 / 2)
//! 5 dup *          # Stack: [25]
//! 1 2 3 sum        # Stack: [6]
//! ```
//!
//! Numbers and names may be written without spaces between them:
//! `3 4+` is `3 4 +`, and `2dup` is `2 dup`.
//!
//! ## Undo
//!
//! Before each input line the engine copies the stack. `undo` puts that
//! copy back. There is exactly one level: a second `undo` does nothing.
//!
//! # Example
//!
//! ```rust
//! use rpncalc::Engine;
//!
//! let mut engine = Engine::new();
//! engine.evaluate_batch("3 4 +").unwrap();
//! assert_eq!(engine.current_stack().render(), "7\n");
//!
//! engine.evaluate_batch("undo").unwrap();
//! assert!(engine.current_stack().is_empty());
//! ```

pub mod display;
pub mod eval;
pub mod lexer;
mod ops;
pub mod registry;

// Re-export commonly used items
pub use eval::{Engine, EvalError, Stack, UNDO};
pub use lexer::{lex, LexError, Token};
pub use registry::{Command, Operation, Registry};

/// Convenience function: evaluate one line on a fresh engine and return the stack
pub fn eval(input: &str) -> Result<Stack, EvalError> {
    let mut engine = Engine::new();
    engine.evaluate_batch(input)?;
    Ok(engine.current_stack().clone())
}
