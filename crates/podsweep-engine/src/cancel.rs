//! Cooperative cancellation for long-running batch runs.
//!
//! A batch against a large collection can run for minutes (700 ms × 500 items
//! ≈ 6 minutes), so the fetcher and executor check a shared token before each
//! remote call. Cancellation is cooperative: an in-flight call is never
//! aborted, only the *next* call is skipped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Clonable cancellation flag shared between a batch run and its controller
/// (e.g. a Ctrl-C handler). All clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
