use tracing::debug;

use crate::league::League;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, ToastLevel};

/// Handle league selection actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::ChangeLeague(league) => Ok(change_league(state, *league)),
        Action::NextLeague => {
            let next = state.league.next();
            Ok(change_league(state, next))
        }
        Action::PrevLeague => {
            let prev = state.league.prev();
            Ok(change_league(state, prev))
        }
        _ => Err(state),
    }
}

fn change_league(state: AppState, league: League) -> (AppState, Effect) {
    if state.league == league {
        return (state, Effect::None);
    }

    debug!("NAV: {} -> {}", state.league, league);
    let mut new_state = state;
    new_state.league = league;

    let notify = Action::Notify(ToastLevel::Info, format!("Switched to {}", league.name()));
    (
        new_state,
        Effect::Batch(vec![Effect::Action(notify), Effect::Action(Action::LoadData)]),
    )
}
