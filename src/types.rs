/// Shared data model for league data
///
/// These types are produced by the data source (external feed or mock
/// generator) and consumed by the CLI commands and the dashboard.
use chrono::NaiveDate;
use std::fmt;

use crate::league::League;
use crate::utils::{win_percentage, FieldValue, Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakKind {
    Win,
    Loss,
}

/// Current run of consecutive results, e.g. W3 or L1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub kind: StreakKind,
    pub length: u32,
}

impl Streak {
    pub fn new(kind: StreakKind, length: u32) -> Self {
        Self { kind, length }
    }

    /// Parse the feed's streak descriptor ("W3", "L12")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let kind = match chars.next()?.to_ascii_uppercase() {
            'W' => StreakKind::Win,
            'L' => StreakKind::Loss,
            _ => return None,
        };
        let length = chars.as_str().parse().ok()?;
        Some(Self { kind, length })
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StreakKind::Win => 'W',
            StreakKind::Loss => 'L',
        };
        write!(f, "{}{}", prefix, self.length)
    }
}

/// A team's record for the current season
///
/// Games played and win percentage are derived in [`TeamStanding::new`] so
/// `wins + losses == games_played` holds for any record that fits in a
/// `u32`; callers holding untrusted counts check with `checked_add` first.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub id: u32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_percentage: String,
    pub streak: Streak,
    pub points: u32,
    pub games_played: u32,
}

impl TeamStanding {
    pub fn new(id: u32, name: impl Into<String>, wins: u32, losses: u32, streak: Streak, points: u32) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            losses,
            win_percentage: win_percentage(wins, losses),
            streak,
            points,
            games_played: wins.saturating_add(losses),
        }
    }

    /// Numeric win percentage, 0.0 when no games have been played
    pub fn win_pct(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }
}

impl Fields for TeamStanding {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "wins" => Some(FieldValue::Number(self.wins as f64)),
            "losses" => Some(FieldValue::Number(self.losses as f64)),
            "win_percentage" => Some(FieldValue::Number(self.win_pct())),
            "streak" => Some(FieldValue::Text(self.streak.to_string())),
            "points" => Some(FieldValue::Number(self.points as f64)),
            "games_played" => Some(FieldValue::Number(self.games_played as f64)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Final,
    Live,
    Scheduled,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Live => "live",
            Self::Scheduled => "scheduled",
        }
    }

    /// Map the feed's status string; unknown values are treated as scheduled
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "final" | "completed" => Self::Final,
            "live" | "in_progress" | "inprogress" => Self::Live,
            _ => Self::Scheduled,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which side of a game came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Away,
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub date: NaiveDate,
    pub status: GameStatus,
}

impl GameResult {
    /// Higher score wins; equal scores are left unresolved
    pub fn winner(&self) -> Outcome {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Less => Outcome::Away,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner() {
            Outcome::Home => Some(&self.home_team),
            Outcome::Away => Some(&self.away_team),
            Outcome::Tie => None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

impl Fields for GameResult {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "home_team" => Some(FieldValue::Text(self.home_team.clone())),
            "away_team" => Some(FieldValue::Text(self.away_team.clone())),
            "home_score" => Some(FieldValue::Number(self.home_score as f64)),
            "away_score" => Some(FieldValue::Number(self.away_score as f64)),
            "date" => Some(FieldValue::Text(self.date.format("%Y-%m-%d").to_string())),
            "status" => Some(FieldValue::Text(self.status.label().to_string())),
            _ => None,
        }
    }
}

/// Aggregate snapshot shown in the summary row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_teams: usize,
    pub games_today: u32,
    pub top_scorer: String,
    pub average_score: f64,
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    External,
    #[default]
    Mock,
}

impl DataSource {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Mock => "mock",
        }
    }
}

/// A result labelled with its league and source
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
    pub league: League,
}

impl<T> Sourced<T> {
    pub fn external(data: T, league: League) -> Self {
        Self { data, source: DataSource::External, league }
    }

    pub fn mock(data: T, league: League) -> Self {
        Self { data, source: DataSource::Mock, league }
    }
}

/// Everything the dashboard renders for one league
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub league: League,
    pub standings: Vec<TeamStanding>,
    pub games: Vec<GameResult>,
    pub stats: DashboardStats,
    pub standings_source: DataSource,
    pub games_source: DataSource,
}

impl Dataset {
    /// Source shown in the status bar: external only if every part was
    pub fn source(&self) -> DataSource {
        if self.standings_source == DataSource::External && self.games_source == DataSource::External {
            DataSource::External
        } else {
            DataSource::Mock
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Team,
    Player,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Player => "player",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub kind: SearchKind,
    pub name: String,
    pub league: League,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub message: Option<String>,
}
