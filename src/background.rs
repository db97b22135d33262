use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Recurring background task with an explicit stop handle
///
/// At most one task is active: [`AutoRefresh::start`] stops the previous
/// one before spawning, and dropping the handle stops it too.
#[derive(Default)]
pub struct AutoRefresh {
    handle: Option<JoinHandle<()>>,
    interval: Option<Duration>,
}

impl AutoRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_tick` every `interval`, starting one interval from now
    pub fn start<F>(&mut self, interval: Duration, on_tick: F)
    where
        F: Fn() + Send + 'static,
    {
        self.stop();
        debug!("REFRESH: starting auto-refresh every {:?}", interval);
        self.interval = Some(interval);
        self.handle = Some(tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer.tick().await; // First tick completes immediately

            loop {
                timer.tick().await;
                on_tick();
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("REFRESH: stopping auto-refresh");
            handle.abort();
        }
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.stop();
    }
}
