use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::action::Action;
use crate::data_provider::{fetch_all_data, SportsDataProvider};
use crate::league::League;

/// Side effects returned by the reducer
///
/// The reducer never performs I/O. It describes what should happen and the
/// runtime executes it, feeding resulting actions back through the queue.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Fetch the full dataset; `fresh` discards cached feed responses first
    LoadData { league: League, fresh: bool },
    /// Restart the search debounce timer with the current query
    DebounceSearch(String),
    CancelSearchDebounce,
    /// Dispatch an action after a delay
    Delayed(Duration, Box<Action>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::LoadData { league, fresh } => f
                .debug_struct("LoadData")
                .field("league", league)
                .field("fresh", fresh)
                .finish(),
            Effect::DebounceSearch(query) => f.debug_tuple("DebounceSearch").field(query).finish(),
            Effect::CancelSearchDebounce => write!(f, "CancelSearchDebounce"),
            Effect::Delayed(delay, action) => {
                f.debug_tuple("Delayed").field(delay).field(action).finish()
            }
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete.
pub struct DataEffects {
    provider: Arc<dyn SportsDataProvider>,
}

impl DataEffects {
    pub fn new(provider: Arc<dyn SportsDataProvider>) -> Self {
        Self { provider }
    }

    /// Load standings, games and stats for `league` as one unit
    pub fn load_all(&self, league: League, fresh: bool) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            // The fetch runs in its own task so a panic still ends the load
            let fetch = tokio::spawn(async move {
                if fresh {
                    provider.invalidate(league).await;
                }
                fetch_all_data(provider.as_ref(), league).await
            });
            let result = match fetch.await {
                Ok(result) => result.map(Arc::new).map_err(|e| e.to_string()),
                Err(e) => {
                    warn!("EFFECT: load task for {} failed: {}", league, e);
                    Err(format!("Data load for {} failed unexpectedly", league))
                }
            };
            debug!("EFFECT: load for {} finished (ok={})", league, result.is_ok());
            Action::DataLoaded(result)
        }))
    }
}

/// Wrap an action so it fires after `delay`
pub fn delayed(delay: Duration, action: Action) -> Effect {
    Effect::Async(Box::pin(async move {
        tokio::time::sleep(delay).await;
        action
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataResult;
    use crate::tui::testing::mock_provider;
    use crate::types::{DashboardStats, GameResult, SearchResults, Sourced, TeamStanding};
    use async_trait::async_trait;

    /// Provider whose standings fetch panics
    struct PanickingProvider;

    #[async_trait]
    impl SportsDataProvider for PanickingProvider {
        async fn fetch_standings(&self, _league: League) -> DataResult<Sourced<Vec<TeamStanding>>> {
            panic!("standings feed exploded");
        }

        async fn fetch_recent_games(&self, _league: League) -> DataResult<Sourced<Vec<GameResult>>> {
            Ok(Sourced::mock(Vec::new(), League::Nba))
        }

        async fn fetch_dashboard_stats(&self, _league: League) -> DataResult<DashboardStats> {
            Ok(DashboardStats::default())
        }

        async fn search(&self, _query: &str, _league: League) -> DataResult<SearchResults> {
            Ok(SearchResults::default())
        }
    }

    #[tokio::test]
    async fn test_load_all_produces_data_loaded() {
        let effects = DataEffects::new(mock_provider());
        let Effect::Async(future) = effects.load_all(League::Nhl, false) else {
            panic!("Expected async effect");
        };
        match future.await {
            Action::DataLoaded(Ok(dataset)) => {
                assert_eq!(dataset.league, League::Nhl);
                assert_eq!(dataset.standings.len(), League::Nhl.roster().len());
            }
            other => panic!("Expected DataLoaded(Ok), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_panicking_load_still_reports_failure() {
        let effects = DataEffects::new(Arc::new(PanickingProvider));
        let Effect::Async(future) = effects.load_all(League::Nfl, false) else {
            panic!("Expected async effect");
        };
        match future.await {
            Action::DataLoaded(Err(message)) => assert!(message.contains("NFL")),
            other => panic!("Expected DataLoaded(Err), got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_waits_before_dispatching() {
        let Effect::Async(future) = delayed(Duration::from_secs(3), Action::DismissToast(7)) else {
            panic!("Expected async effect");
        };
        let started = tokio::time::Instant::now();
        let action = future.await;
        assert!(started.elapsed() >= Duration::from_secs(3));
        assert!(matches!(action, Action::DismissToast(7)));
    }

    #[test]
    fn test_effect_debug_hides_future() {
        let effect = Effect::Async(Box::pin(async { Action::Quit }));
        assert_eq!(format!("{:?}", effect), "Async(..)");
    }
}
