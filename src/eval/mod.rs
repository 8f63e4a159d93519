//! Evaluation engine for rpncalc
//!
//! The engine owns two stacks: the live stack and the snapshot taken
//! before the last batch. Each input line is one batch:
//! - the line is tokenized
//! - unless the whole line is `undo`, the live stack is snapshotted
//! - tokens run left to right: literals push themselves, labels dispatch
//!   through the registry, `undo` restores the snapshot
//!
//! A failing token stops the batch. Whatever earlier tokens did stays on
//! the stack, and the engine is ready for the next line.

mod snapshot;
mod stack;
mod tests;

pub use stack::Stack;

use crate::lexer::{lex, LexError};
use crate::registry::Registry;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// The command that restores the previous snapshot
pub const UNDO: &str = "undo";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Stack is too small for {op}: needs {needed}, has {available}")]
    StackTooSmall {
        op: String,
        needed: usize,
        available: usize,
    },
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Returned by `previous_stack` when there is nothing to undo
static NO_SNAPSHOT: Stack = Stack::new();

/// One calculator session
#[derive(Debug, Clone)]
pub struct Engine {
    /// The live stack
    pub(crate) stack: Stack,
    /// State of `stack` before the last non-undo batch; `None` once consumed
    pub(crate) previous: Option<Stack>,
    pub(crate) registry: Arc<Registry>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_registry(Arc::new(Registry::standard()))
    }

    /// Build an engine around an existing (possibly shared) registry
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Engine {
            stack: Stack::new(),
            previous: None,
            registry,
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn current_stack(&self) -> &Stack {
        &self.stack
    }

    /// The undo snapshot. Empty when there is nothing to undo.
    pub fn previous_stack(&self) -> &Stack {
        self.previous.as_ref().unwrap_or(&NO_SNAPSHOT)
    }

    /// Evaluate one input line
    pub fn evaluate_batch(&mut self, line: &str) -> Result<(), EvalError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let tokens = lex(line)?;

        if line != UNDO {
            self.take_snapshot();
        }

        debug!(line, tokens = tokens.len(), "evaluating batch");
        for token in &tokens {
            if let Err(e) = self.eval_token(token.as_str()) {
                debug!(token = token.as_str(), error = %e, "batch stopped");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Literal, then registered operation, then `undo`
    pub(crate) fn eval_token(&mut self, token: &str) -> Result<(), EvalError> {
        if let Ok(value) = token.parse::<f64>() {
            trace!(value, "push");
            self.stack.push(value);
            return Ok(());
        }

        if let Some(op) = self.registry.lookup(token) {
            trace!(op = op.label, depth = self.stack.len(), "apply");
            return op.apply(&mut self.stack);
        }

        if token == UNDO {
            self.undo();
            return Ok(());
        }

        Err(EvalError::UnknownOperation(token.to_string()))
    }
}
