use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Collapses bursts of calls into one trailing invocation
///
/// Each [`Debouncer::call`] aborts the pending delayed task (if any) and
/// schedules a new one, so only the last argument of a burst reaches the
/// callback, `wait` after the burst ends. Must be used inside a tokio runtime.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    pub fn call(&mut self, arg: T) {
        self.cancel();
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(arg);
        }));
    }

    /// Drop the pending invocation without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!("DEBOUNCE: cancelling pending call");
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
