//! Stack manipulation. None of these fail, whatever the stack size.

use crate::registry::{Operation, Registry};

pub(super) fn register(r: &mut Registry) {
    r.register(
        Operation::new("clear", "clears the stack", |s| {
            s.flush();
            Ok(())
        }),
        &[],
    );
    r.register(
        Operation::new("dup", "duplicates the last element of the stack", |s| {
            s.duplicate();
            Ok(())
        }),
        &[],
    );
    r.register(
        Operation::new("swap", "swaps the two last elements of the stack", |s| {
            if s.len() > 1 {
                s.swap();
            }
            Ok(())
        }),
        &[],
    );
    r.register(
        Operation::new("drop", "drops the last element of the stack", |s| {
            if !s.is_empty() {
                s.pop()?;
            }
            Ok(())
        }),
        &[],
    );
}
