/// Client for the optional external JSON feed
///
/// Requests go to `{base_url}/{league}/{season}/{endpoint}.json` with HTTP
/// Basic auth (API key as user, fixed password). Any transport error,
/// non-2xx status or undecodable body is reported as a [`DataError`]; the
/// caller decides whether to fall back to mock data.
use chrono::{DateTime, Local, NaiveDate};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::cache;
use crate::config::ApiConfig;
use crate::error::{DataError, DataResult};
use crate::league::League;
use crate::types::{GameResult, GameStatus, Streak, StreakKind, TeamStanding};

/// Password half of the Basic auth pair; the feed only checks the key
pub const API_PASSWORD: &str = "MYSPORTSFEEDS";

pub const STANDINGS_ENDPOINT: &str = "standings";
pub const GAMES_ENDPOINT: &str = "games";

#[derive(Debug, Clone)]
pub struct ExternalClient {
    http: Client,
    base_url: String,
    api_key: String,
    season: String,
}

impl ExternalClient {
    pub fn new(api: &ApiConfig) -> DataResult<Self> {
        let http = Client::builder()
            .timeout(api.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::Network {
                url: api.base_url.clone(),
                message: format!("failed to build http client: {}", e),
            })?;
        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            api_key: api.api_key.trim().to_string(),
            season: api.season.clone(),
        })
    }

    pub fn endpoint_url(&self, league: League, endpoint: &str) -> String {
        format!("{}/{}/{}/{}.json", self.base_url, league.code(), self.season, endpoint)
    }

    /// Uncached GET of one endpoint, decoded as JSON
    pub async fn get_json(&self, league: League, endpoint: &str) -> DataResult<serde_json::Value> {
        if league.is_mock_only() {
            return Err(DataError::NotConfigured(league));
        }
        let url = self.endpoint_url(league, endpoint);
        debug!("API: GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(API_PASSWORD))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DataError::Network { url: url.clone(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status { url, status: status.as_u16() });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| DataError::Parse { url, message: e.to_string() })
    }

    pub async fn standings(&self, league: League) -> DataResult<Vec<TeamStanding>> {
        let body = cache::fetch_feed_cached(self, league, STANDINGS_ENDPOINT).await?;
        parse_standings(body).map_err(|message| DataError::Parse {
            url: self.endpoint_url(league, STANDINGS_ENDPOINT),
            message,
        })
    }

    pub async fn recent_games(&self, league: League) -> DataResult<Vec<GameResult>> {
        let body = cache::fetch_feed_cached(self, league, GAMES_ENDPOINT).await?;
        parse_games(body).map_err(|message| DataError::Parse {
            url: self.endpoint_url(league, GAMES_ENDPOINT),
            message,
        })
    }
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
struct TeamEntry {
    team: TeamRef,
    stats: TeamStats,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
    #[serde(default)]
    city: Option<String>,
    name: String,
}

impl TeamRef {
    fn display_name(&self) -> String {
        match &self.city {
            Some(city) if !city.is_empty() => format!("{} {}", city, self.name),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TeamStats {
    standings: StandingsStats,
    #[serde(default)]
    streak: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StandingsStats {
    wins: u32,
    losses: u32,
    #[serde(default)]
    points: u32,
}

#[derive(Debug, Deserialize)]
struct GamesResponse {
    games: Vec<GameEntry>,
}

#[derive(Debug, Deserialize)]
struct GameEntry {
    schedule: Schedule,
    #[serde(default)]
    score: Option<Score>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Schedule {
    id: u32,
    start_time: String,
    away_team: GameTeam,
    home_team: GameTeam,
    #[serde(default)]
    played_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GameTeam {
    #[serde(default)]
    name: Option<String>,
    abbreviation: String,
}

impl GameTeam {
    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.abbreviation.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Score {
    #[serde(default)]
    away_score_total: Option<u32>,
    #[serde(default)]
    home_score_total: Option<u32>,
}

/// Map a standings body onto [`TeamStanding`]s
pub fn parse_standings(body: serde_json::Value) -> Result<Vec<TeamStanding>, String> {
    let response: StandingsResponse = serde_json::from_value(body).map_err(|e| e.to_string())?;
    response
        .teams
        .into_iter()
        .map(|entry| {
            let record = &entry.stats.standings;
            if record.wins.checked_add(record.losses).is_none() {
                return Err(format!(
                    "impossible record for team {}: {}-{}",
                    entry.team.id, record.wins, record.losses
                ));
            }
            let streak = entry
                .stats
                .streak
                .as_deref()
                .and_then(Streak::parse)
                .unwrap_or(Streak::new(StreakKind::Win, 0));
            Ok(TeamStanding::new(
                entry.team.id,
                entry.team.display_name(),
                record.wins,
                record.losses,
                streak,
                record.points,
            ))
        })
        .collect()
}

/// Map a games body onto [`GameResult`]s
pub fn parse_games(body: serde_json::Value) -> Result<Vec<GameResult>, String> {
    let response: GamesResponse = serde_json::from_value(body).map_err(|e| e.to_string())?;
    response
        .games
        .into_iter()
        .map(|entry| {
            let date = parse_start_date(&entry.schedule.start_time)?;
            let (away_score, home_score) = entry
                .score
                .map(|s| (s.away_score_total.unwrap_or(0), s.home_score_total.unwrap_or(0)))
                .unwrap_or((0, 0));
            Ok(GameResult {
                id: entry.schedule.id,
                home_team: entry.schedule.home_team.display_name(),
                away_team: entry.schedule.away_team.display_name(),
                home_score,
                away_score,
                date,
                status: GameStatus::from_label(entry.schedule.played_status.as_deref().unwrap_or("")),
            })
        })
        .collect()
}

fn parse_start_date(start_time: &str) -> Result<NaiveDate, String> {
    DateTime::parse_from_rfc3339(start_time)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(start_time, "%Y-%m-%d"))
        .map_err(|e| format!("invalid startTime '{}': {}", start_time, e))
}
