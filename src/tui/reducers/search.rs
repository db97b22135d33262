use std::sync::Arc;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::presenter::DashboardView;
use crate::tui::state::{AppState, ToastLevel};
use crate::utils::filter_by_search;

/// Fields matched against the query for each record type
const STANDING_SEARCH_FIELDS: &[&str] = &["name"];
const GAME_SEARCH_FIELDS: &[&str] = &["home_team", "away_team"];

/// Handle search box editing and filtering
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_search(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::FocusSearch => {
            let mut new_state = state;
            new_state.search.editing = true;
            Ok((new_state, Effect::None))
        }
        Action::SearchInput(c) => {
            let mut new_state = state;
            new_state.search.query.push(*c);
            let query = new_state.search.query.clone();
            Ok((new_state, Effect::DebounceSearch(query)))
        }
        Action::SearchBackspace => {
            let mut new_state = state;
            new_state.search.query.pop();
            let query = new_state.search.query.clone();
            Ok((new_state, Effect::DebounceSearch(query)))
        }
        Action::SubmitSearch => {
            let mut new_state = state;
            new_state.search.editing = false;
            let query = new_state.search.query.clone();
            Ok((
                new_state,
                Effect::Batch(vec![
                    Effect::CancelSearchDebounce,
                    Effect::Action(Action::ApplySearch(query)),
                ]),
            ))
        }
        Action::CancelSearch => Ok(cancel_search(state)),
        Action::ApplySearch(query) => Ok(apply_search(state, query)),
        _ => Err(state),
    }
}

/// Leave the search box and drop any filter
fn cancel_search(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.search.editing = false;
    let had_filter = new_state.search.active_filter.is_some() || !new_state.search.query.is_empty();
    new_state.search.query.clear();

    if !had_filter {
        return (new_state, Effect::CancelSearchDebounce);
    }
    (
        new_state,
        Effect::Batch(vec![
            Effect::CancelSearchDebounce,
            Effect::Action(Action::ApplySearch(String::new())),
        ]),
    )
}

/// Filter the cached dataset; stats are never filtered
fn apply_search(state: AppState, query: &str) -> (AppState, Effect) {
    let Some(dataset) = state.data.dataset.clone() else {
        debug!("SEARCH: no data loaded yet");
        return (state, Effect::None);
    };

    let mut new_state = state;
    let term = query.trim();

    if term.is_empty() {
        debug!("SEARCH: cleared, restoring full view");
        new_state.search.active_filter = None;
        new_state.data.view = Some(Arc::new(DashboardView::full(&dataset)));
        new_state.system.clear_status_message();
        return (new_state, Effect::None);
    }

    let standings = filter_by_search(&dataset.standings, term, STANDING_SEARCH_FIELDS);
    let games = filter_by_search(&dataset.games, term, GAME_SEARCH_FIELDS);
    debug!(
        "SEARCH: '{}' matched {} standings, {} games",
        term,
        standings.len(),
        games.len()
    );

    let nothing_found = standings.is_empty() && games.is_empty();
    new_state.system.set_status_message(format!(
        "Filter \"{}\": {} standings, {} games",
        term,
        standings.len(),
        games.len()
    ));
    new_state.search.active_filter = Some(term.to_string());
    new_state.data.view = Some(Arc::new(DashboardView::build(
        &dataset,
        &standings,
        &games,
        Some(term.to_string()),
    )));

    if nothing_found {
        let notify = Action::Notify(ToastLevel::Info, format!("No results found for \"{}\"", term));
        return (new_state, Effect::Action(notify));
    }
    (new_state, Effect::None)
}
