use std::sync::Arc;

use crate::league::League;
use crate::types::Dataset;

use super::state::ToastLevel;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading, timers)
/// - The auto-refresh task
#[derive(Debug, Clone)]
pub enum Action {
    // Data actions
    LoadData,
    AutoRefreshTick,
    Refresh,
    Retry,

    // Data loaded (from effects)
    DataLoaded(Result<Arc<Dataset>, String>),

    // League selection
    ChangeLeague(League),
    NextLeague,
    PrevLeague,

    // Search box
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
    /// Filter the cached dataset (debounced input lands here)
    ApplySearch(String),

    // Toasts
    Notify(ToastLevel, String),
    ExpireToast(u64),
    DismissToast(u64),

    Quit,
}
