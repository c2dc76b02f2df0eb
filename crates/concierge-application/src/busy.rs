//! Shared busy indicator for sign-in and dashboard loads.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts operations that are waiting on an external collaborator.
///
/// The indicator reads busy while at least one [`BusyGuard`] is alive. Guards
/// release on drop, so errors, early returns and dropped futures all clear
/// the flag.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one more operation as in flight until the guard is dropped.
    pub fn enter(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

#[derive(Debug)]
#[must_use = "the indicator clears as soon as the guard is dropped"]
pub struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_while_any_guard_lives() {
        let busy = BusyIndicator::new();
        assert!(!busy.is_busy());

        let first = busy.enter();
        let second = busy.enter();
        drop(first);
        assert!(busy.is_busy());

        drop(second);
        assert!(!busy.is_busy());
    }

    #[tokio::test]
    async fn dropped_future_releases_guard() {
        let busy = BusyIndicator::new();
        let guard = busy.enter();
        let pending = async move {
            let _guard = guard;
            std::future::pending::<()>().await;
        };
        assert!(busy.is_busy());

        drop(pending);
        assert!(!busy.is_busy());
    }
}
