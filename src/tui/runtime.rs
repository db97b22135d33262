use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::action::Action;
use super::effects::{delayed, DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;
use crate::background::AutoRefresh;
use crate::debounce::Debouncer;

/// Runtime - owns the state and executes effects
///
/// The Runtime is responsible for:
/// - Holding the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Owning the two timers: search debounce and auto-refresh
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,

    search_debounce: Debouncer<String>,
    auto_refresh: AutoRefresh,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        let search_tx = action_tx.clone();
        let search_debounce = Debouncer::new(
            initial_state.system.config.search_debounce(),
            move |query: String| {
                let _ = search_tx.send(Action::ApplySearch(query));
            },
        );

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
            search_debounce,
            auto_refresh: AutoRefresh::new(),
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect
    ///
    /// Timer effects are handled here because the runtime owns the timers;
    /// everything else is queued for the async executor.
    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::LoadData { league, fresh } => {
                debug!("EFFECT: Executing data load for {} (fresh={})", league, fresh);
                let fetch_effect = self.data_effects.load_all(league, fresh);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::DebounceSearch(query) => {
                trace!("EFFECT: Debouncing search '{}'", query);
                self.search_debounce.call(query);
            }
            Effect::CancelSearchDebounce => {
                self.search_debounce.cancel();
            }
            Effect::Delayed(delay, action) => {
                let _ = self.effect_tx.send(delayed(delay, *action));
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Start the recurring reload, replacing any running one
    pub fn start_auto_refresh(&mut self) {
        let interval = self.state.system.config.refresh_interval();
        let tx = self.action_tx.clone();
        self.auto_refresh.start(interval, move || {
            let _ = tx.send(Action::AutoRefreshTick);
        });
    }

    pub fn stop_auto_refresh(&mut self) {
        self.auto_refresh.stop();
    }

    pub fn auto_refresh(&self) -> &AutoRefresh {
        &self.auto_refresh
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Runtime-owned effects are resolved in execute_effect() before queuing
            Effect::LoadData { .. }
            | Effect::DebounceSearch(_)
            | Effect::CancelSearchDebounce
            | Effect::Delayed(..) => {
                warn!("Runtime effect reached async executor - this should be handled by execute_effect()");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataResult;
    use crate::data_provider::SportsDataProvider;
    use crate::league::League;
    use crate::tui::state::ToastLevel;
    use crate::tui::testing::{mock_provider, sample_dataset, test_state};
    use crate::types::{DashboardStats, GameResult, SearchResults, Sourced, TeamStanding};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn create_test_runtime() -> Runtime {
        Runtime::new(test_state(), Arc::new(DataEffects::new(mock_provider())))
    }

    /// Provider that counts standings fetches and answers after a delay
    struct CountingProvider {
        standings_calls: AtomicUsize,
    }

    #[async_trait]
    impl SportsDataProvider for CountingProvider {
        async fn fetch_standings(&self, league: League) -> DataResult<Sourced<Vec<TeamStanding>>> {
            self.standings_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(Sourced::mock(sample_dataset().standings, league))
        }

        async fn fetch_recent_games(&self, league: League) -> DataResult<Sourced<Vec<GameResult>>> {
            Ok(Sourced::mock(sample_dataset().games, league))
        }

        async fn fetch_dashboard_stats(&self, _league: League) -> DataResult<DashboardStats> {
            Ok(sample_dataset().stats)
        }

        async fn search(&self, _query: &str, _league: League) -> DataResult<SearchResults> {
            Ok(SearchResults::default())
        }
    }

    /// Drain actions until `done` holds or the (paused) clock passes `limit`
    async fn run_until(runtime: &mut Runtime, limit: Duration, done: impl Fn(&AppState) -> bool) {
        let start = tokio::time::Instant::now();
        while start.elapsed() < limit {
            tokio::time::sleep(Duration::from_millis(10)).await;
            runtime.process_actions();
            if done(runtime.state()) {
                return;
            }
        }
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let runtime = create_test_runtime();
        assert_eq!(runtime.state().league, League::Nba);
        assert!(!runtime.state().data.loading);
    }

    #[tokio::test]
    async fn test_action_queue() {
        let mut runtime = create_test_runtime();

        let tx = runtime.action_sender();
        tx.send(Action::ChangeLeague(League::Nhl)).unwrap();

        let count = runtime.process_actions();

        assert_eq!(count, 1);
        assert_eq!(runtime.state().league, League::Nhl);
    }

    #[tokio::test]
    async fn test_effect_execution() {
        let mut runtime = create_test_runtime();

        let effect = Effect::Async(Box::pin(async move { Action::ChangeLeague(League::Mlb) }));
        runtime.effect_tx.send(effect).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        runtime.process_actions();

        assert_eq!(runtime.state().league, League::Mlb);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_data_round_trip() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::LoadData);
        assert!(runtime.state().data.loading);

        run_until(&mut runtime, Duration::from_secs(5), |s| s.data.dataset.is_some()).await;

        let state = runtime.state();
        assert!(!state.data.loading);
        assert_eq!(state.data.dataset.as_ref().unwrap().league, League::Nba);
        assert!(state.data.view.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_loads_fetch_once() {
        let provider = Arc::new(CountingProvider { standings_calls: AtomicUsize::new(0) });
        let mut runtime = Runtime::new(test_state(), Arc::new(DataEffects::new(provider.clone())));

        runtime.dispatch(Action::LoadData);
        runtime.dispatch(Action::LoadData);

        run_until(&mut runtime, Duration::from_secs(5), |s| !s.data.loading).await;

        assert_eq!(provider.standings_calls.load(Ordering::SeqCst), 1);
        assert!(runtime.state().data.dataset.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_applies_last_query() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::DataLoaded(Ok(Arc::new(sample_dataset()))));

        runtime.dispatch(Action::FocusSearch);
        for c in "lakers".chars() {
            runtime.dispatch(Action::SearchInput(c));
        }
        assert!(runtime.state().search.active_filter.is_none());

        run_until(&mut runtime, Duration::from_secs(2), |s| s.search.active_filter.is_some()).await;
        assert_eq!(runtime.state().search.active_filter.as_deref(), Some("lakers"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_and_is_removed() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::Notify(ToastLevel::Info, "hello".to_string()));
        assert_eq!(runtime.state().toasts.items.len(), 1);

        run_until(&mut runtime, Duration::from_millis(3100), |s| {
            s.toasts.items.first().is_some_and(|t| t.leaving)
        })
        .await;
        assert!(runtime.state().toasts.items[0].leaving);

        run_until(&mut runtime, Duration::from_secs(2), |s| s.toasts.items.is_empty()).await;
        assert!(runtime.state().toasts.items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_refresh_triggers_load() {
        let mut runtime = create_test_runtime();
        runtime.start_auto_refresh();
        assert!(runtime.auto_refresh().is_running());

        run_until(&mut runtime, Duration::from_secs(65), |s| s.data.dataset.is_some()).await;
        assert!(runtime.state().data.dataset.is_some());

        runtime.stop_auto_refresh();
        assert!(!runtime.auto_refresh().is_running());
    }
}
