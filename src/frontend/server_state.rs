use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Manages server-wide state: shutdown flag and in-flight answer tracking
#[derive(Clone)]
pub struct ServerState {
    shutdown: Arc<AtomicBool>,
    pending_operations: Arc<AtomicUsize>,
    max_in_flight: usize,
}

impl ServerState {
    /// Creates a new ServerState; `max_in_flight` of 0 disables the limit
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_operations: Arc::new(AtomicUsize::new(0)),
            max_in_flight,
        }
    }

    /// Returns true if the server is shutting down
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Signals that the server should start shutting down
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    /// Increments the pending operations counter (call before answering)
    pub fn increment_pending(&self) {
        self.pending_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrements the pending operations counter (call after the answer is ready)
    pub fn decrement_pending(&self) {
        self.pending_operations.fetch_sub(1, Ordering::Relaxed);
    }

    /// Counts one answer as in flight until the returned guard is dropped.
    pub fn track_pending(&self) -> PendingGuard {
        self.increment_pending();
        PendingGuard {
            state: self.clone(),
        }
    }

    /// Returns the current count of pending operations
    pub fn pending_operations_count(&self) -> usize {
        self.pending_operations.load(Ordering::Relaxed)
    }

    /// True once the number of answers being computed reaches the limit.
    pub fn is_under_pressure(&self) -> bool {
        if self.max_in_flight == 0 {
            return false;
        }

        let pending = self.pending_operations.load(Ordering::Relaxed);
        if pending > 0 {
            tracing::debug!(
                target: "quick_info::backpressure",
                pending = pending,
                max_in_flight = self.max_in_flight,
                "Backpressure check"
            );
        }

        pending >= self.max_in_flight
    }
}

/// Keeps one answer counted in `pending_operations` while alive.
pub struct PendingGuard {
    state: ServerState,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.state.decrement_pending();
    }
}
