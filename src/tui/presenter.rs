/// Presentation model derived from a dataset
///
/// A [`DashboardView`] is rebuilt from scratch whenever the data or the
/// search filter changes. It owns its [`ChartSet`], so installing a new view
/// releases the previous charts before the next frame draws.
use crate::league::League;
use crate::types::{DashboardStats, DataSource, Dataset, GameResult, TeamStanding};
use crate::utils::{sort_by_key, SortDirection};

/// Number of teams plotted in each chart
pub const CHART_TEAM_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct WinLossBar {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointsSample {
    pub team: String,
    pub points: u32,
}

/// Chart series for the two dashboard charts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSet {
    /// Top teams by win percentage
    pub wins_losses: Vec<WinLossBar>,
    /// Top teams by total points
    pub points: Vec<PointsSample>,
}

impl ChartSet {
    pub fn from_standings(standings: &[TeamStanding]) -> Self {
        let wins_losses = sort_by_key(standings, "win_percentage", SortDirection::Descending)
            .into_iter()
            .take(CHART_TEAM_LIMIT)
            .map(|s| WinLossBar { team: s.name, wins: s.wins, losses: s.losses })
            .collect();
        let points = sort_by_key(standings, "points", SortDirection::Descending)
            .into_iter()
            .take(CHART_TEAM_LIMIT)
            .map(|s| PointsSample { team: s.name, points: s.points })
            .collect();
        Self { wins_losses, points }
    }

    pub fn is_empty(&self) -> bool {
        self.wins_losses.is_empty() && self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub league: League,
    /// Sorted by win percentage, best first
    pub standings: Vec<TeamStanding>,
    pub games: Vec<GameResult>,
    pub stats: DashboardStats,
    pub charts: ChartSet,
    pub source: DataSource,
    /// Query that produced this view, if it is a filtered subset
    pub filter: Option<String>,
}

impl DashboardView {
    pub fn build(
        dataset: &Dataset,
        standings: &[TeamStanding],
        games: &[GameResult],
        filter: Option<String>,
    ) -> Self {
        Self {
            league: dataset.league,
            standings: sort_by_key(standings, "win_percentage", SortDirection::Descending),
            games: games.to_vec(),
            stats: dataset.stats.clone(),
            charts: ChartSet::from_standings(standings),
            source: dataset.source(),
            filter,
        }
    }

    /// Unfiltered view of a whole dataset
    pub fn full(dataset: &Dataset) -> Self {
        Self::build(dataset, &dataset.standings, &dataset.games, None)
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty() && self.games.is_empty()
    }
}
