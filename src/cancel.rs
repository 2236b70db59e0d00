//! # Cancellation Module
//!
//! Cooperative cancellation for a collection run. The flag is set once
//! by an external signal (user abort, Ctrl-C) and polled by the engine
//! before each batch start and each job submission; it is never cleared
//! mid-run and never aborts work already in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag shared between the run and its canceller
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a fresh, unset flag for one run
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation at the next poll point
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_visible_through_clones() {
        let flag = CancelFlag::new();
        let handle = flag.clone();
        assert!(!flag.is_cancelled());

        handle.cancel();
        assert!(flag.is_cancelled());
        assert!(handle.is_cancelled());
    }
}
