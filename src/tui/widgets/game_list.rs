/// GameList widget - recent results as compact cards
///
/// Each card is three lines: date and status, then home and away rows with
/// scores. The higher-scoring side is bold and carries the winner marker;
/// a tie marks neither side.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use crate::config::DisplayConfig;
use crate::formatting::pad_right;
use crate::tui::widgets::RenderableWidget;
use crate::types::{GameResult, GameStatus, Outcome};
use crate::utils::format_date;

const TEAM_COL_WIDTH: usize = 24;
const SCORE_COL_WIDTH: usize = 4;
/// Team + score + space + marker
const CARD_WIDTH: usize = TEAM_COL_WIDTH + SCORE_COL_WIDTH + 2;
/// Three content lines plus one blank line between cards
const CARD_HEIGHT: u16 = 4;

#[derive(Debug)]
pub struct GameList<'a> {
    pub games: &'a [GameResult],
}

impl<'a> GameList<'a> {
    pub fn new(games: &'a [GameResult]) -> Self {
        Self { games }
    }

    fn status_style(status: GameStatus, config: &DisplayConfig) -> Style {
        match status {
            GameStatus::Final => Style::default().fg(Color::DarkGray),
            GameStatus::Live => Style::default().fg(config.success_fg).add_modifier(Modifier::BOLD),
            GameStatus::Scheduled => Style::default().fg(config.info_fg),
        }
    }

    fn render_team_row(
        team: &str,
        score: u32,
        winner: bool,
        x: u16,
        y: u16,
        width: usize,
        buf: &mut Buffer,
        config: &DisplayConfig,
    ) {
        let marker = if winner { config.box_chars.winner_marker.as_str() } else { "" };
        let line = format!(
            "{}{:>score_w$} {}",
            pad_right(team, TEAM_COL_WIDTH),
            score,
            marker,
            score_w = SCORE_COL_WIDTH
        );
        let style = if winner {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buf.set_stringn(x, y, &line, width, style);
    }

    fn render_card(game: &GameResult, area: Rect, y: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let width = (area.width as usize).min(CARD_WIDTH);

        let date = format_date(game.date);
        buf.set_stringn(area.x, y, &date, width, Style::default().fg(Color::DarkGray));

        let status = game.status.label().to_uppercase();
        if status.len() + date.len() < width {
            let status_x = area.x + (width - status.len()) as u16;
            buf.set_string(status_x, y, &status, Self::status_style(game.status, config));
        }

        let outcome = game.winner();
        if y + 1 < area.bottom() {
            Self::render_team_row(
                &game.home_team,
                game.home_score,
                outcome == Outcome::Home,
                area.x,
                y + 1,
                width,
                buf,
                config,
            );
        }
        if y + 2 < area.bottom() {
            Self::render_team_row(
                &game.away_team,
                game.away_score,
                outcome == Outcome::Away,
                area.x,
                y + 2,
                width,
                buf,
                config,
            );
        }
    }
}

impl RenderableWidget for GameList<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.games.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                "No recent games",
                area.width as usize,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let mut y = area.y;
        for game in self.games {
            if y >= area.bottom() {
                break;
            }
            Self::render_card(game, area, y, buf, config);
            y = y.saturating_add(CARD_HEIGHT);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some((self.games.len().max(1) as u16).saturating_mul(CARD_HEIGHT))
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(CARD_WIDTH as u16)
    }
}
