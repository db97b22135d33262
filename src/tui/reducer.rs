use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_data_loading, reduce_navigation, reduce_search, reduce_toasts};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O and no async: everything with a side effect is described by the
/// returned `Effect` and executed by the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_search(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_toasts(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::Quit => (state, Effect::None),

        other => {
            debug!("ACTION: unhandled {:?}", other);
            (state, Effect::None)
        }
    }
}
