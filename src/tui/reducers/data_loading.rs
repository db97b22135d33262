use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::presenter::DashboardView;
use crate::tui::state::{AppState, ToastLevel};
use crate::types::Dataset;

pub const REFRESHING_MESSAGE: &str = "Refreshing data...";
pub const REFRESHED_MESSAGE: &str = "Data refreshed successfully";

/// Handle all data loading actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::LoadData | Action::AutoRefreshTick => Ok(start_load(state, false)),
        Action::Refresh => Ok(handle_refresh(state)),
        Action::Retry => Ok(handle_retry(state)),
        Action::DataLoaded(result) => Ok(handle_data_loaded(state, result.clone())),
        _ => Err(state),
    }
}

/// Begin a load unless one is already in flight
pub fn start_load(state: AppState, fresh: bool) -> (AppState, Effect) {
    if state.data.loading {
        debug!("DATA: load already in flight, ignoring");
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.data.loading = true;
    new_state.data.error = None;
    let league = new_state.league;
    debug!("DATA: loading {}", league);
    (new_state, Effect::LoadData { league, fresh })
}

fn handle_refresh(state: AppState) -> (AppState, Effect) {
    let notify = Effect::Action(Action::Notify(ToastLevel::Info, REFRESHING_MESSAGE.to_string()));

    // A load already in flight answers this refresh too
    let (mut new_state, load) = start_load(state, true);
    new_state.data.refresh_notice_pending = true;
    (new_state, Effect::Batch(vec![notify, load]))
}

fn handle_retry(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.error = None;
    start_load(new_state, false)
}

fn handle_data_loaded(state: AppState, result: Result<Arc<Dataset>, String>) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading = false;
    let announce = std::mem::take(&mut new_state.data.refresh_notice_pending);

    match result {
        Ok(dataset) => {
            debug!(
                "DATA: Loaded {} standings, {} games for {}",
                dataset.standings.len(),
                dataset.games.len(),
                dataset.league
            );
            new_state.data.view = Some(Arc::new(DashboardView::full(&dataset)));
            new_state.data.dataset = Some(dataset);
            new_state.data.error = None;
            new_state.search.query.clear();
            new_state.search.active_filter = None;
            new_state.system.last_refresh = Some(SystemTime::now());
            new_state.system.clear_status_message();

            if announce {
                let notify = Action::Notify(ToastLevel::Success, REFRESHED_MESSAGE.to_string());
                return (new_state, Effect::Action(notify));
            }
            (new_state, Effect::None)
        }
        Err(e) => {
            debug!("DATA: Load failed: {}", e);
            new_state.data.error = Some(format!("Failed to load data: {}", e));
            new_state.system.set_status_error_message(e);
            (new_state, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::League;
    use crate::tui::testing::{sample_dataset, test_state};

    fn loaded_state() -> AppState {
        let (state, _) = reduce_data_loading(
            test_state(),
            &Action::DataLoaded(Ok(Arc::new(sample_dataset()))),
        )
        .unwrap();
        state
    }

    #[test]
    fn test_load_sets_loading_and_clears_error() {
        let mut state = test_state();
        state.data.error = Some("old".to_string());

        let (state, effect) = reduce_data_loading(state, &Action::LoadData).unwrap();

        assert!(state.data.loading);
        assert!(state.data.error.is_none());
        assert!(matches!(effect, Effect::LoadData { league: League::Nba, fresh: false }));
    }

    #[test]
    fn test_second_load_is_noop_while_loading() {
        let (state, _) = reduce_data_loading(test_state(), &Action::LoadData).unwrap();
        let (state, effect) = reduce_data_loading(state, &Action::LoadData).unwrap();
        assert!(state.data.loading);
        assert!(matches!(effect, Effect::None));

        let (_, effect) = reduce_data_loading(state, &Action::AutoRefreshTick).unwrap();
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_loaded_installs_dataset_and_view() {
        let state = loaded_state();
        assert!(!state.data.loading);
        assert!(state.data.dataset.is_some());
        let view = state.data.view.as_ref().unwrap();
        assert_eq!(view.standings.len(), sample_dataset().standings.len());
        assert!(state.system.last_refresh.is_some());
    }

    #[test]
    fn test_failure_shows_error_and_clears_loading() {
        let (state, _) = reduce_data_loading(test_state(), &Action::LoadData).unwrap();
        let (state, effect) = reduce_data_loading(
            state,
            &Action::DataLoaded(Err("connection refused".to_string())),
        )
        .unwrap();

        assert!(!state.data.loading);
        assert_eq!(
            state.data.error.as_deref(),
            Some("Failed to load data: connection refused")
        );
        assert_eq!(state.system.status_message.as_deref(), Some("connection refused"));
        assert!(state.system.status_is_error);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_failure_keeps_previous_dataset() {
        let state = loaded_state();
        let (state, _) =
            reduce_data_loading(state, &Action::DataLoaded(Err("boom".to_string()))).unwrap();
        assert!(state.data.dataset.is_some());
        assert!(state.data.error.is_some());
    }

    #[test]
    fn test_refresh_notifies_then_loads_fresh() {
        let (state, effect) = reduce_data_loading(test_state(), &Action::Refresh).unwrap();
        assert!(state.data.loading);
        assert!(state.data.refresh_notice_pending);

        let Effect::Batch(effects) = effect else {
            panic!("Expected batch effect");
        };
        assert!(matches!(
            &effects[0],
            Effect::Action(Action::Notify(ToastLevel::Info, msg)) if msg == REFRESHING_MESSAGE
        ));
        assert!(matches!(effects[1], Effect::LoadData { fresh: true, .. }));
    }

    #[test]
    fn test_refresh_during_load_still_notifies() {
        let (state, _) = reduce_data_loading(test_state(), &Action::LoadData).unwrap();
        let (state, effect) = reduce_data_loading(state, &Action::Refresh).unwrap();

        assert!(state.data.loading);
        assert!(state.data.refresh_notice_pending);
        let Effect::Batch(effects) = effect else {
            panic!("Expected batch effect");
        };
        assert!(matches!(
            &effects[0],
            Effect::Action(Action::Notify(ToastLevel::Info, msg)) if msg == REFRESHING_MESSAGE
        ));
        assert!(matches!(effects[1], Effect::None));

        let (_, effect) = reduce_data_loading(
            state,
            &Action::DataLoaded(Ok(Arc::new(sample_dataset()))),
        )
        .unwrap();
        assert!(matches!(
            effect,
            Effect::Action(Action::Notify(ToastLevel::Success, ref msg)) if msg == REFRESHED_MESSAGE
        ));
    }

    #[test]
    fn test_refresh_success_announced() {
        let (state, _) = reduce_data_loading(test_state(), &Action::Refresh).unwrap();
        let (state, effect) = reduce_data_loading(
            state,
            &Action::DataLoaded(Ok(Arc::new(sample_dataset()))),
        )
        .unwrap();

        assert!(!state.data.refresh_notice_pending);
        assert!(matches!(
            effect,
            Effect::Action(Action::Notify(ToastLevel::Success, ref msg)) if msg == REFRESHED_MESSAGE
        ));
    }

    #[test]
    fn test_refresh_failure_not_announced_as_success() {
        let (state, _) = reduce_data_loading(test_state(), &Action::Refresh).unwrap();
        let (state, effect) =
            reduce_data_loading(state, &Action::DataLoaded(Err("timeout".to_string()))).unwrap();

        assert!(!state.data.refresh_notice_pending);
        assert!(state.data.error.is_some());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_plain_load_success_is_silent() {
        let (state, _) = reduce_data_loading(test_state(), &Action::LoadData).unwrap();
        let (_, effect) = reduce_data_loading(
            state,
            &Action::DataLoaded(Ok(Arc::new(sample_dataset()))),
        )
        .unwrap();
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_retry_clears_error_and_loads() {
        let mut state = test_state();
        state.data.error = Some("Failed to load data: boom".to_string());

        let (state, effect) = reduce_data_loading(state, &Action::Retry).unwrap();
        assert!(state.data.error.is_none());
        assert!(state.data.loading);
        assert!(matches!(effect, Effect::LoadData { fresh: false, .. }));
    }

    #[test]
    fn test_reload_clears_search_filter() {
        let mut state = loaded_state();
        state.search.query = "lakers".to_string();
        state.search.active_filter = Some("lakers".to_string());

        let (state, _) = reduce_data_loading(
            state,
            &Action::DataLoaded(Ok(Arc::new(sample_dataset()))),
        )
        .unwrap();
        assert!(state.search.query.is_empty());
        assert!(state.search.active_filter.is_none());
        assert!(state.data.view.as_ref().unwrap().filter.is_none());
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        assert!(reduce_data_loading(test_state(), &Action::Quit).is_err());
    }
}
