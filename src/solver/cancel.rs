//! Cooperative cancellation
//!
//! The search checks the flag on entry to every DFS step, so raising it from
//! another thread stops a pass within one step.

use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared abort flag for a running solve
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
    /// Checks left before the flag raises itself
    #[cfg(test)]
    budget: Option<Arc<AtomicUsize>>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag that stays down for `checks` calls to `is_cancelled`, then
    /// raises itself
    #[cfg(test)]
    pub(crate) fn after_checks(checks: usize) -> Self {
        Self {
            cancelled: Arc::default(),
            budget: Some(Arc::new(AtomicUsize::new(checks))),
        }
    }

    /// Ask any search watching this flag to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Clear the flag so it can be reused for the next solve
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.spend_check();
        self.cancelled.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    fn spend_check(&self) {
        let Some(budget) = &self.budget else {
            return;
        };
        let spent = budget
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |left| left.checked_sub(1))
            .is_err();
        if spent {
            self.cancel();
        }
    }

    #[cfg(not(test))]
    #[inline]
    #[allow(clippy::unused_self)]
    const fn spend_check(&self) {}
}
