use super::Engine;
use tracing::debug;

impl Engine {
    /// Copy the live stack into the undo slot, replacing any older snapshot
    pub(crate) fn take_snapshot(&mut self) {
        if let Some(previous) = self.previous.as_mut() {
            previous.copy_from(&self.stack);
            return;
        }
        self.previous = Some(self.stack.clone());
    }

    /// Restore the stack to its state before the last batch.
    ///
    /// Single level: the snapshot is consumed, so a second `undo` in a row
    /// does nothing.
    pub fn undo(&mut self) {
        match self.previous.take() {
            Some(snapshot) => {
                debug!(restored = snapshot.len(), dropped = self.stack.len(), "undo");
                self.stack = snapshot;
            }
            None => debug!("undo: nothing to restore"),
        }
    }

    /// Forget the snapshot so the next `undo` does nothing
    pub fn discard_snapshot(&mut self) {
        self.previous = None;
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }
}
