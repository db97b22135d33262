use crate::commands::title;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::SportsDataProvider;
use crate::formatting::{format_header, pad_right};
use crate::league::League;
use crate::types::{GameResult, Outcome};
use crate::utils::format_date;
use anyhow::{Context, Result};

/// Width of each team name column
const TEAM_COL_WIDTH: usize = 24;

/// Width of the date column ("Jan 5, 2025", "Dec 25, 2025")
const DATE_COL_WIDTH: usize = 12;

/// One line per game: date, home, score, away, status
///
/// The winning side gets the winner marker; ties get none.
pub fn format_game_line(game: &GameResult, display: &DisplayConfig) -> String {
    let marker = &display.box_chars.winner_marker;
    let (home_mark, away_mark) = match game.winner() {
        Outcome::Home => (marker.as_str(), " "),
        Outcome::Away => (" ", marker.as_str()),
        Outcome::Tie => (" ", " "),
    };
    format!(
        "{} {} {} {:>3} - {:<3} {} {} {}",
        pad_right(&format_date(game.date), DATE_COL_WIDTH),
        pad_right(&game.home_team, TEAM_COL_WIDTH),
        home_mark,
        game.home_score,
        game.away_score,
        away_mark,
        pad_right(&game.away_team, TEAM_COL_WIDTH),
        game.status.label().to_uppercase(),
    )
}

pub fn format_games(games: &[GameResult], display: &DisplayConfig) -> String {
    if games.is_empty() {
        return "No recent games\n".to_string();
    }
    let mut output = String::new();
    for game in games {
        output.push_str(&format_game_line(game, display));
        output.push('\n');
    }
    output
}

pub async fn run(provider: &dyn SportsDataProvider, league: League, config: &Config) -> Result<()> {
    let games = provider
        .fetch_recent_games(league)
        .await
        .with_context(|| format!("Failed to fetch {} games", league))?;

    let display = config.display();
    print!("{}", format_header(&title(league, "Recent Games", games.source), true, &display));
    print!("{}", format_games(&games.data, &display));
    Ok(())
}
