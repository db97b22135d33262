use std::time::Duration;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

/// How long a toast stays dimmed before it is removed
pub const TOAST_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Handle notification toasts
///
/// A toast is shown for the configured duration, then enters its exit
/// phase, then is removed.
pub fn reduce_toasts(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Notify(level, message) => {
            let mut new_state = state;
            let id = new_state.toasts.push(*level, message.clone());
            let shown_for = new_state.system.config.toast_duration();
            Ok((new_state, Effect::Delayed(shown_for, Box::new(Action::ExpireToast(id)))))
        }
        Action::ExpireToast(id) => {
            let mut new_state = state;
            if new_state.toasts.mark_leaving(*id) {
                Ok((
                    new_state,
                    Effect::Delayed(TOAST_EXIT_DURATION, Box::new(Action::DismissToast(*id))),
                ))
            } else {
                Ok((new_state, Effect::None))
            }
        }
        Action::DismissToast(id) => {
            let mut new_state = state;
            new_state.toasts.remove(*id);
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}
