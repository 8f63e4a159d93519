//! Operation registry
//!
//! Maps labels to operations. An operation is registered once under its
//! primary label and may be reachable through any number of aliases
//! (`^`, `pow` and `**` all resolve to the same exponentiation entry).
//!
//! The registry is a plain value. `Registry::standard()` builds the full
//! catalog; engines hold it behind an `Arc` so several sessions can share
//! one table.

use crate::eval::{EvalError, Stack};
use crate::ops;
use std::collections::{HashMap, HashSet};

/// Signature every operation implements
pub type Command = fn(&mut Stack) -> Result<(), EvalError>;

#[derive(Debug, Clone)]
pub struct Operation {
    /// Primary label, used for lookup and in help output
    pub label: &'static str,
    pub description: &'static str,
    pub command: Command,
}

impl Operation {
    pub fn new(label: &'static str, description: &'static str, command: Command) -> Self {
        Operation {
            label,
            description,
            command,
        }
    }

    pub fn apply(&self, stack: &mut Stack) -> Result<(), EvalError> {
        (self.command)(stack)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Catalog order, used for help listings
    operations: Vec<Operation>,
    /// label or alias -> index into `operations`
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// A registry with nothing in it
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full built-in catalog
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        ops::register_all(&mut registry);
        registry
    }

    /// Add an operation under its label plus `aliases`.
    ///
    /// A label that is already taken is rebound to the new operation. An
    /// older operation left with no label pointing at it is removed, so it
    /// no longer shows up in `operations()` or `len()`.
    pub fn register(&mut self, op: Operation, aliases: &[&'static str]) {
        let idx = self.operations.len();
        self.index.insert(op.label, idx);
        for alias in aliases {
            self.index.insert(*alias, idx);
        }
        self.operations.push(op);
        self.prune_unreachable();
    }

    /// Drop operations no label resolves to and renumber the index
    fn prune_unreachable(&mut self) {
        let live: HashSet<usize> = self.index.values().copied().collect();
        if live.len() == self.operations.len() {
            return;
        }

        let mut remap = vec![0; self.operations.len()];
        let mut kept = Vec::with_capacity(live.len());
        for (old, op) in self.operations.drain(..).enumerate() {
            if live.contains(&old) {
                remap[old] = kept.len();
                kept.push(op);
            }
        }
        self.operations = kept;
        for idx in self.index.values_mut() {
            *idx = remap[*idx];
        }
    }

    pub fn lookup(&self, label: &str) -> Option<&Operation> {
        self.index.get(label).map(|&idx| &self.operations[idx])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Run the operation named `label`. Unknown labels leave the stack untouched.
    pub fn apply(&self, label: &str, stack: &mut Stack) -> Result<(), EvalError> {
        match self.lookup(label) {
            Some(op) => op.apply(stack),
            None => Err(EvalError::UnknownOperation(label.to_string())),
        }
    }

    /// Operations in registration order (aliases not repeated)
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Every label other than the primary one that resolves to `label`'s operation
    pub fn aliases_of(&self, label: &str) -> Vec<&'static str> {
        let Some(&target) = self.index.get(label) else {
            return Vec::new();
        };
        let primary = self.operations[target].label;
        let mut aliases: Vec<&'static str> = self
            .index
            .iter()
            .filter(|(name, &idx)| idx == target && **name != primary)
            .map(|(name, _)| *name)
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Number of distinct operations (aliases not counted)
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
