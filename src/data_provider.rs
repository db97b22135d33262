/// Trait for providing league data, abstracting over the external feed and mock data
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::api::{ExternalClient, GAMES_ENDPOINT, STANDINGS_ENDPOINT};
use crate::cache;
use crate::config::Config;
use crate::error::DataResult;
use crate::fixtures::MockGenerator;
use crate::league::League;
use crate::types::{DashboardStats, Dataset, GameResult, SearchResults, Sourced, TeamStanding};

#[async_trait]
pub trait SportsDataProvider: Send + Sync {
    /// Standings for every team in the league
    async fn fetch_standings(&self, league: League) -> DataResult<Sourced<Vec<TeamStanding>>>;

    /// A handful of recently played games
    async fn fetch_recent_games(&self, league: League) -> DataResult<Sourced<Vec<GameResult>>>;

    /// Summary numbers for the stats row
    async fn fetch_dashboard_stats(&self, league: League) -> DataResult<DashboardStats>;

    /// Teams and players matching `query`
    async fn search(&self, query: &str, league: League) -> DataResult<SearchResults>;

    /// Discard any cached responses so the next fetch is fresh
    async fn invalidate(&self, _league: League) {}
}

/// Fetch standings, games and stats concurrently
///
/// All three must succeed; the first failure fails the whole load.
pub async fn fetch_all_data(provider: &dyn SportsDataProvider, league: League) -> DataResult<Dataset> {
    let (standings, games, stats) = tokio::try_join!(
        provider.fetch_standings(league),
        provider.fetch_recent_games(league),
        provider.fetch_dashboard_stats(league),
    )
    .map_err(|e| {
        error!("Failed to load {} data: {}", league, e);
        e
    })?;

    debug!(
        "DATA: Loaded {} standings ({}), {} games ({}) for {}",
        standings.data.len(),
        standings.source.tag(),
        games.data.len(),
        games.source.tag(),
        league
    );

    Ok(Dataset {
        league,
        standings: standings.data,
        games: games.data,
        stats,
        standings_source: standings.source,
        games_source: games.source,
    })
}

/// Dual-path data source: external feed when configured, mock data otherwise
///
/// Feed failures of any kind fall back to mock data; only mock failures
/// (simulated transient errors) reach the caller.
pub struct LeagueDataSource {
    external: Option<ExternalClient>,
    mock: MockGenerator,
    latency: Duration,
}

impl LeagueDataSource {
    pub fn new(external: Option<ExternalClient>, mock: MockGenerator, latency: Duration) -> Self {
        Self { external, mock, latency }
    }

    pub fn from_config(config: &Config) -> Self {
        let external = if config.api.has_usable_key() {
            match ExternalClient::new(&config.api) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("External feed disabled: {}", e);
                    None
                }
            }
        } else {
            debug!("DATA: No API key configured, using mock data");
            None
        };
        Self::new(
            external,
            MockGenerator::new(&config.mock),
            Duration::from_millis(config.mock.latency_ms),
        )
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    fn external_for(&self, league: League) -> Option<&ExternalClient> {
        if league.is_mock_only() {
            None
        } else {
            self.external.as_ref()
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl SportsDataProvider for LeagueDataSource {
    async fn fetch_standings(&self, league: League) -> DataResult<Sourced<Vec<TeamStanding>>> {
        if let Some(client) = self.external_for(league) {
            match client.standings(league).await {
                Ok(standings) => return Ok(Sourced::external(standings, league)),
                Err(e) => warn!("Standings feed failed, using mock data: {}", e),
            }
        }
        self.simulate_latency().await;
        self.mock
            .standings(league)
            .map(|standings| Sourced::mock(standings, league))
            .map_err(|e| {
                error!("Error fetching standings: {}", e);
                e
            })
    }

    async fn fetch_recent_games(&self, league: League) -> DataResult<Sourced<Vec<GameResult>>> {
        if let Some(client) = self.external_for(league) {
            match client.recent_games(league).await {
                Ok(games) => return Ok(Sourced::external(games, league)),
                Err(e) => warn!("Games feed failed, using mock data: {}", e),
            }
        }
        self.simulate_latency().await;
        self.mock
            .recent_games(league)
            .map(|games| Sourced::mock(games, league))
            .map_err(|e| {
                error!("Error fetching games: {}", e);
                e
            })
    }

    async fn fetch_dashboard_stats(&self, league: League) -> DataResult<DashboardStats> {
        self.simulate_latency().await;
        self.mock.dashboard_stats(league).map_err(|e| {
            error!("Error fetching dashboard stats: {}", e);
            e
        })
    }

    async fn search(&self, query: &str, league: League) -> DataResult<SearchResults> {
        self.simulate_latency().await;
        Ok(self.mock.search(query, league))
    }

    async fn invalidate(&self, league: League) {
        if let Some(client) = self.external_for(league) {
            cache::invalidate_league(client, league, &[STANDINGS_ENDPOINT, GAMES_ENDPOINT]).await;
        }
    }
}
