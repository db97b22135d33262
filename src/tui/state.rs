use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::league::League;
use crate::types::Dataset;

use super::presenter::DashboardView;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently selected league
    pub league: League,

    /// Fetched data and what is on screen
    pub data: DataState,

    /// Search box
    pub search: SearchState,

    /// Transient notifications
    pub toasts: ToastState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            league: config.default_league,
            system: SystemState {
                config,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Last successfully fetched dataset, replaced wholesale on each load
    pub dataset: Option<Arc<Dataset>>,

    /// What the dashboard renders: the full dataset or a filtered subset
    pub view: Option<Arc<DashboardView>>,

    /// Set while a load is in flight; a second load is refused until cleared
    pub loading: bool,

    /// Message for the error panel
    pub error: Option<String>,

    /// Announce success when the in-flight load completes (manual refresh)
    pub refresh_notice_pending: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text typed into the search box
    pub query: String,

    /// Whether key presses go to the search box
    pub editing: bool,

    /// Query currently filtering the view
    pub active_filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    /// In its exit phase, rendered dimmed until dismissed
    pub leaving: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message, level, leaving: false });
        id
    }

    pub fn mark_leaving(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    /// Back to the key hints
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}
