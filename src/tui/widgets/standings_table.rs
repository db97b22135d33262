/// StandingsTable widget - league standings sorted by win percentage
///
/// This widget renders a table with columns for:
/// - Rank
/// - Team name
/// - Wins (W)
/// - Losses (L)
/// - Win percentage (PCT)
/// - Current streak (STRK)
///
/// Rows are expected to arrive already sorted (see `DashboardView`).

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use crate::config::DisplayConfig;
use crate::formatting::{format_header, pad_right};
use crate::tui::widgets::RenderableWidget;
use crate::types::{StreakKind, TeamStanding};

/// Column width constants
const RANK_COL_WIDTH: usize = 3;
const TEAM_NAME_COL_WIDTH: usize = 24;
const W_COL_WIDTH: usize = 3;
const L_COL_WIDTH: usize = 3;
const PCT_COL_WIDTH: usize = 5;
const STREAK_COL_WIDTH: usize = 4;
const TABLE_WIDTH: usize =
    RANK_COL_WIDTH + TEAM_NAME_COL_WIDTH + W_COL_WIDTH + L_COL_WIDTH + PCT_COL_WIDTH + STREAK_COL_WIDTH + 5;

#[derive(Debug)]
pub struct StandingsTable<'a> {
    pub teams: &'a [TeamStanding],
    /// Optional header text (e.g., "NBA Standings")
    pub header: Option<&'a str>,
}

impl<'a> StandingsTable<'a> {
    pub fn new(teams: &'a [TeamStanding], header: Option<&'a str>) -> Self {
        Self { teams, header }
    }

    /// Calculate the total height needed for this table
    fn calculate_height(&self) -> u16 {
        let mut height = 0;

        // Header (if present): text + underline
        if self.header.is_some() {
            height += 2;
        }

        // Column header + separator
        height += 2;

        height + self.teams.len().max(1) as u16
    }

    fn format_row(rank: usize, team: &TeamStanding) -> String {
        format!(
            "{:>rank_w$} {} {:>w_w$} {:>l_w$} {:>pct_w$} {:>strk_w$}",
            rank,
            pad_right(&team.name, TEAM_NAME_COL_WIDTH),
            team.wins,
            team.losses,
            team.win_percentage,
            team.streak.to_string(),
            rank_w = RANK_COL_WIDTH,
            w_w = W_COL_WIDTH,
            l_w = L_COL_WIDTH,
            pct_w = PCT_COL_WIDTH,
            strk_w = STREAK_COL_WIDTH,
        )
    }

    fn streak_style(team: &TeamStanding, config: &DisplayConfig) -> Style {
        match team.streak.kind {
            StreakKind::Win => Style::default().fg(config.success_fg),
            StreakKind::Loss => Style::default().fg(config.error_fg),
        }
    }
}

impl RenderableWidget for StandingsTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let mut y = area.y;
        let width = area.width as usize;

        if let Some(header_text) = self.header {
            let header = format_header(header_text, true, config);
            for line in header.lines() {
                if y >= area.bottom() {
                    return;
                }
                buf.set_stringn(area.x, y, line, width, Style::default().fg(config.header_fg));
                y += 1;
            }
        }

        if y < area.bottom() {
            let columns = format!(
                "{:>rank_w$} {} {:>w_w$} {:>l_w$} {:>pct_w$} {:>strk_w$}",
                "#",
                pad_right("Team", TEAM_NAME_COL_WIDTH),
                "W",
                "L",
                "PCT",
                "STRK",
                rank_w = RANK_COL_WIDTH,
                w_w = W_COL_WIDTH,
                l_w = L_COL_WIDTH,
                pct_w = PCT_COL_WIDTH,
                strk_w = STREAK_COL_WIDTH,
            );
            buf.set_stringn(area.x, y, &columns, width, Style::default());
            y += 1;
        }

        if y < area.bottom() {
            let separator = config.box_chars.horizontal.repeat(TABLE_WIDTH.min(width));
            buf.set_string(area.x, y, &separator, Style::default().fg(Color::DarkGray));
            y += 1;
        }

        if self.teams.is_empty() {
            if y < area.bottom() {
                buf.set_stringn(area.x, y, "  No teams to show", width, Style::default().fg(Color::DarkGray));
            }
            return;
        }

        for (i, team) in self.teams.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let row = Self::format_row(i + 1, team);
            buf.set_stringn(area.x, y, &row, width, Style::default());

            // Colour the streak column
            let streak_x = area.x + (TABLE_WIDTH - STREAK_COL_WIDTH) as u16;
            if streak_x < area.right() {
                let streak = format!("{:>w$}", team.streak.to_string(), w = STREAK_COL_WIDTH);
                let remaining = (area.right() - streak_x) as usize;
                buf.set_stringn(streak_x, y, &streak, remaining, Self::streak_style(team, config));
            }
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.calculate_height())
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(TABLE_WIDTH as u16)
    }
}
