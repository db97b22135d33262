/// Top-level screen composition
///
/// Splits the terminal into fixed regions and hands each one to a widget.
/// Nothing here mutates state; everything is derived from `AppState`.
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};

use crate::config::DisplayConfig;
use crate::types::DashboardStats;

use super::state::AppState;
use super::widgets::{
    GameList, KeyHint, LeagueTabBar, PointsChart, RenderableWidget, SearchBar, StandingsTable,
    StatsSummary, StatusBar, StatusPanel, ToastStack, WinLossChart,
};

const TAB_BAR_HEIGHT: u16 = 2;
const SEARCH_BAR_HEIGHT: u16 = 1;
const SUMMARY_HEIGHT: u16 = 2;
const STATUS_BAR_HEIGHT: u16 = 2;
const CHART_HEIGHT: u16 = 12;
const STANDINGS_COLUMN_WIDTH: u16 = 48;

/// Draw the whole dashboard into a frame
pub fn render(frame: &mut Frame, state: &AppState) {
    let config = state.system.config.display();
    let area = frame.area();
    draw(state, area, frame.buffer_mut(), &config);
}

pub fn draw(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let [tabs, search, summary, content, status] = Layout::vertical([
        Constraint::Length(TAB_BAR_HEIGHT),
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(SUMMARY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    LeagueTabBar::new(state.league, state.data.loading).render(tabs, buf, config);
    SearchBar::new(
        &state.search.query,
        state.search.editing,
        state.search.active_filter.as_deref(),
    )
    .render(search, buf, config);

    let empty_stats = DashboardStats::default();
    let view = state.data.view.as_deref();
    let stats = view.map(|v| &v.stats).unwrap_or(&empty_stats);
    StatsSummary::new(stats).render(summary, buf, config);

    draw_content(state, content, buf, config);
    status_bar(state).render(status, buf, config);

    let toasts = ToastStack::new(&state.toasts.items);
    if let Some(height) = toasts.preferred_height() {
        let overlay = Rect {
            height: height.min(area.height),
            ..area
        };
        toasts.render(overlay, buf, config);
    }
}

/// Loading/error panel, then tables, then charts
fn draw_content(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    // Loading wins over a stale error; the reducer clears the error on reload anyway
    let panel = if state.data.loading {
        Some(StatusPanel::Loading)
    } else {
        state.data.error.as_deref().map(StatusPanel::Error)
    };

    let panel_height = panel.and_then(|p| p.preferred_height()).unwrap_or(0);
    let [panel_area, body] =
        Layout::vertical([Constraint::Length(panel_height), Constraint::Min(0)]).areas(area);

    let [tables, charts] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(CHART_HEIGHT)]).areas(body);
    let [standings_area, games_area] = Layout::horizontal([
        Constraint::Length(STANDINGS_COLUMN_WIDTH),
        Constraint::Min(0),
    ])
    .areas(tables);
    let [win_loss_area, points_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(charts);

    if let Some(view) = state.data.view.as_deref() {
        let header = match &view.filter {
            Some(term) => format!("{} Standings: \"{}\"", view.league.abbrev(), term),
            None => format!("{} Standings", view.league.abbrev()),
        };
        StandingsTable::new(&view.standings, Some(&header)).render(standings_area, buf, config);
        GameList::new(&view.games).render(games_area, buf, config);
        WinLossChart::new(&view.charts.wins_losses).render(win_loss_area, buf, config);
        PointsChart::new(&view.charts.points).render(points_area, buf, config);
    }

    if state.data.loading {
        buf.set_style(body, Style::default().add_modifier(Modifier::DIM));
    }

    if let Some(panel) = panel {
        panel.render(panel_area, buf, config);
    }
}

fn status_bar(state: &AppState) -> StatusBar {
    let mut bar = StatusBar::new()
        .with_last_refresh(state.system.last_refresh)
        .with_refresh_interval(Some(state.system.config.refresh_interval()))
        .with_time_format(state.system.config.time_format.clone())
        .with_source(state.data.view.as_ref().map(|v| v.source));

    if state.search.editing {
        bar = bar.with_hints(vec![
            KeyHint::new("Enter", "Apply"),
            KeyHint::new("Esc", "Cancel"),
        ]);
    } else if let Some(message) = &state.system.status_message {
        bar = bar.with_message(message.clone(), state.system.status_is_error);
    }
    bar
}
