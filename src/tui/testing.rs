//! General test utilities for TUI tests.
//!
//! Provides deterministic datasets and state builders shared by the reducer,
//! runtime and presenter tests. For widget rendering helpers, see
//! `crate::tui::widgets::testing`.

use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, MockConfig};
use crate::data_provider::{LeagueDataSource, SportsDataProvider};
use crate::fixtures::MockGenerator;
use crate::league::League;
use crate::types::{
    DashboardStats, DataSource, Dataset, GameResult, GameStatus, Streak, StreakKind, TeamStanding,
};

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;

/// State with default config, NBA selected, nothing loaded
pub fn test_state() -> AppState {
    AppState::new(Config::default())
}

/// State after a successful load of [`sample_dataset`]
pub fn loaded_state() -> AppState {
    let (state, _) = reduce(test_state(), Action::DataLoaded(Ok(Arc::new(sample_dataset()))));
    state
}

/// NBA standings with distinct win percentages and a points order that
/// differs from the win percentage order
pub fn sample_standings() -> Vec<TeamStanding> {
    League::Nba
        .roster()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let i = i as u32;
            let wins = 25 + 2 * i;
            let losses = 50 - 3 * i;
            let streak = if i % 2 == 0 {
                Streak::new(StreakKind::Win, i % 5 + 1)
            } else {
                Streak::new(StreakKind::Loss, i % 3 + 1)
            };
            let points = 9000 + ((i * 5) % 12) * 100;
            TeamStanding::new(i + 1, *name, wins, losses, streak, points)
        })
        .collect()
}

pub fn sample_game(id: u32, home: &str, away: &str, home_score: u32, away_score: u32) -> GameResult {
    GameResult {
        id,
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score,
        away_score,
        date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        status: GameStatus::Final,
    }
}

pub fn sample_games() -> Vec<GameResult> {
    vec![
        sample_game(1, "Los Angeles Lakers", "Boston Celtics", 112, 104),
        sample_game(2, "Miami Heat", "Golden State Warriors", 99, 101),
        sample_game(3, "Chicago Bulls", "Los Angeles Lakers", 108, 115),
        sample_game(4, "Denver Nuggets", "Phoenix Suns", 120, 120),
    ]
}

pub fn sample_stats() -> DashboardStats {
    DashboardStats {
        total_teams: 12,
        games_today: 7,
        top_scorer: "LeBron James".to_string(),
        average_score: 104.5,
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        league: League::Nba,
        standings: sample_standings(),
        games: sample_games(),
        stats: sample_stats(),
        standings_source: DataSource::Mock,
        games_source: DataSource::Mock,
    }
}

/// Mock-backed provider with no latency and no injected failures
pub fn mock_provider() -> Arc<dyn SportsDataProvider> {
    let mock = MockGenerator::seeded(
        &MockConfig { error_rate: 0.0, latency_ms: 0, game_count: 6 },
        7,
    );
    Arc::new(LeagueDataSource::new(None, mock, Duration::ZERO))
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
