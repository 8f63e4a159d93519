use super::EvalError;
use crate::display::format_number;
use std::fmt;

/// The numeric value stack. The top is the last element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    items: Vec<f64>,
}

impl Stack {
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: f64) -> &mut Self {
        self.items.push(value);
        self
    }

    pub fn pop(&mut self) -> Result<f64, EvalError> {
        self.items.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Copy the top value above itself. No-op on an empty stack.
    pub fn duplicate(&mut self) -> &mut Self {
        if let Some(&top) = self.items.last() {
            self.items.push(top);
        }
        self
    }

    /// Exchange the top two values. No-op with fewer than two.
    pub fn swap(&mut self) -> &mut Self {
        let len = self.items.len();
        if len >= 2 {
            self.items.swap(len - 1, len - 2);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<f64> {
        self.items.last().copied()
    }

    pub fn flush(&mut self) {
        self.items.clear();
    }

    /// Bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Replace contents with a copy of `other`, reusing the allocation
    pub(crate) fn copy_from(&mut self, other: &Stack) {
        self.items.clear();
        self.items.extend_from_slice(&other.items);
    }

    /// One value per line, top of stack last
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.items {
            writeln!(f, "{}", format_number(*v))?;
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Stack {
    fn from(items: Vec<f64>) -> Self {
        Stack { items }
    }
}

impl FromIterator<f64> for Stack {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
