use log::trace;
use std::cell::Cell;
use std::rc::Rc;

/// Counts the pointer captures a surface currently holds.
///
/// A capture keeps moves flowing to a session even after the contact leaves
/// the object's bounds. Sessions own their [`PointerCapture`], so the count
/// drops back to zero on every exit path.
#[derive(Debug, Clone, Default)]
pub struct CaptureTracker {
    live: Rc<Cell<usize>>,
}

impl CaptureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captures acquired and not yet released
    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn acquire(&self, owner: &'static str) -> PointerCapture {
        self.live.set(self.live.get() + 1);
        trace!("Capture acquired by {owner} ({} live)", self.live.get());
        PointerCapture {
            live: Rc::clone(&self.live),
            owner,
        }
    }
}

/// Released on drop.
#[derive(Debug)]
pub struct PointerCapture {
    live: Rc<Cell<usize>>,
    owner: &'static str,
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
        trace!("Capture released by {} ({} live)", self.owner, self.live.get());
    }
}
