/// Keyboard event to action mapping
///
/// This module converts crossterm KeyEvents into Actions. While the search
/// box has focus, printable keys are routed to it instead of the shortcuts.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use crate::league::League;

/// Ctrl (or Cmd/Super, where the terminal reports it) shortcuts
fn handle_command_keys(key: &KeyEvent) -> Option<Action> {
    if !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
    {
        return None;
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::FocusSearch),
        KeyCode::Char('c') => Some(Action::Quit),
        _ => None,
    }
}

fn handle_search_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Esc => Some(Action::CancelSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Number keys select a league by tab position
fn league_for_digit(c: char) -> Option<League> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    League::all().get(index).copied()
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (editing={})", key, state.search.editing);

    if let Some(action) = handle_command_keys(&key) {
        return Some(action);
    }

    if state.search.editing {
        return handle_search_keys(key.code);
    }

    // Error panel: Enter or R re-attempts the load
    if state.data.error.is_some() && matches!(key.code, KeyCode::Enter | KeyCode::Char('R')) {
        return Some(Action::Retry);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevLeague),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::NextLeague),
        KeyCode::BackTab => Some(Action::PrevLeague),
        KeyCode::Esc if state.search.active_filter.is_some() => Some(Action::CancelSearch),
        KeyCode::Char(c) => league_for_digit(c).map(Action::ChangeLeague),
        _ => None,
    }
}
