/// Widget-based rendering infrastructure for TUI
///
/// This module provides a trait-based architecture for composable, testable widgets.
/// Each dashboard region is one small widget that renders straight into a
/// ratatui Buffer, so every region can be tested in isolation.

#[cfg(test)]
pub mod testing;

pub mod charts;
pub use charts::{PointsChart, WinLossChart};

pub mod game_list;
pub use game_list::GameList;

pub mod search_bar;
pub use search_bar::SearchBar;

pub mod standings_table;
pub use standings_table::StandingsTable;

pub mod stats_summary;
pub use stats_summary::StatsSummary;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

pub mod status_panel;
pub use status_panel::StatusPanel;

pub mod tab_bar;
pub use tab_bar::LeagueTabBar;

pub mod toast;
pub use toast::ToastStack;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Composability (widgets can contain other widgets)
/// - Testability (can render to test buffers)
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Last word of a team name ("Los Angeles Lakers" -> "Lakers"), for narrow labels
pub fn short_team_name(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}
