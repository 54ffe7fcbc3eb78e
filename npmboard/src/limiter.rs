use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default cap on concurrently in-flight upstream requests.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 10;

/// Caps the number of outbound requests in flight at once.
///
/// One instance is shared across every pipeline of a batch run, so the
/// metadata, statistics, and trend calls for all packages draw from a single
/// pool. Clones share the same pool.
#[derive(Debug, Clone)]
pub struct RequestLimiter {
    semaphore: Arc<Semaphore>,
}

impl RequestLimiter {
    /// Create a limiter that allows at most `max_concurrent` tasks at a time.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Wait for a free slot, then drive `task` to completion.
    ///
    /// The slot is returned when the task finishes, whether it succeeded or
    /// failed; waiting callers are released as slots free up.
    pub async fn run<T>(&self, task: impl Future<Output = T>) -> T {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("semaphore is never closed");
        task.await
    }
}
