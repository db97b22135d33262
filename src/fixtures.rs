/// Mock league data
///
/// Produces randomized data with a fixed shape: one standing per roster team,
/// a handful of recent games with distinct pairings, and summary stats. Used
/// whenever the external feed is not configured or fails, and for EPL.
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::Mutex;

use crate::config::MockConfig;
use crate::error::{DataError, DataResult};
use crate::league::League;
use crate::types::{
    DashboardStats, GameResult, GameStatus, SearchHit, SearchKind, SearchResults, Streak, StreakKind,
    TeamStanding,
};
use crate::utils::{random_int_with, random_pick_with};

const WINS_RANGE: RangeInclusive<i64> = 10..=60;
const LOSSES_RANGE: RangeInclusive<i64> = 10..=60;
const STREAK_RANGE: RangeInclusive<i64> = 1..=5;
const GAMES_TODAY_RANGE: RangeInclusive<i64> = 0..=15;
/// Recent games are dated within this many days before today
const RECENT_DAYS: i64 = 6;
const MAX_SEARCH_HITS: usize = 10;

/// Per-game scoring range for one side
fn score_range(league: League) -> RangeInclusive<i64> {
    match league {
        League::Nba => 85..=135,
        League::Nfl => 3..=42,
        League::Mlb => 0..=12,
        League::Nhl => 0..=7,
        League::Epl => 0..=5,
    }
}

fn star_players(league: League) -> &'static [&'static str] {
    match league {
        League::Nba => &[
            "LeBron James",
            "Stephen Curry",
            "Giannis Antetokounmpo",
            "Luka Doncic",
            "Nikola Jokic",
            "Joel Embiid",
            "Jayson Tatum",
            "Kevin Durant",
        ],
        League::Nfl => &[
            "Patrick Mahomes",
            "Josh Allen",
            "Jalen Hurts",
            "Lamar Jackson",
            "Christian McCaffrey",
            "Tyreek Hill",
        ],
        League::Mlb => &[
            "Shohei Ohtani",
            "Aaron Judge",
            "Mookie Betts",
            "Ronald Acuna Jr.",
            "Juan Soto",
            "Freddie Freeman",
        ],
        League::Nhl => &[
            "Connor McDavid",
            "Auston Matthews",
            "Nathan MacKinnon",
            "Leon Draisaitl",
            "Nikita Kucherov",
            "David Pastrnak",
        ],
        League::Epl => &[
            "Erling Haaland",
            "Mohamed Salah",
            "Bukayo Saka",
            "Son Heung-min",
            "Bruno Fernandes",
            "Cole Palmer",
        ],
    }
}

/// Random mock data source
///
/// The generator owns its RNG so tests can seed it; `error_rate` injects
/// transient failures that are surfaced to the caller.
pub struct MockGenerator {
    error_rate: f64,
    game_count: usize,
    rng: Mutex<StdRng>,
}

impl MockGenerator {
    pub fn new(config: &MockConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: &MockConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &MockConfig, rng: StdRng) -> Self {
        Self {
            error_rate: config.error_rate.clamp(0.0, 1.0),
            game_count: config.game_count,
            rng: Mutex::new(rng),
        }
    }

    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock only means another generator call panicked; the RNG is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }

    fn maybe_fail(&self, rng: &mut StdRng, what: &'static str, league: League) -> DataResult<()> {
        if self.error_rate > 0.0 && rng.gen_bool(self.error_rate) {
            return Err(DataError::Transient { what, league });
        }
        Ok(())
    }

    pub fn standings(&self, league: League) -> DataResult<Vec<TeamStanding>> {
        self.with_rng_locked(|rng| {
            self.maybe_fail(rng, "standings", league)?;
            let per_game = score_range(league);
            Ok(league
                .roster()
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let wins = random_int_with(rng, *WINS_RANGE.start(), *WINS_RANGE.end()) as u32;
                    let losses = random_int_with(rng, *LOSSES_RANGE.start(), *LOSSES_RANGE.end()) as u32;
                    let kind = if rng.gen_bool(0.5) { StreakKind::Win } else { StreakKind::Loss };
                    let length = random_int_with(rng, *STREAK_RANGE.start(), *STREAK_RANGE.end()) as u32;
                    let avg_points = random_int_with(rng, *per_game.start() + 1, *per_game.end()) as u32;
                    TeamStanding::new(
                        i as u32 + 1,
                        *name,
                        wins,
                        losses,
                        Streak::new(kind, length),
                        avg_points * (wins + losses),
                    )
                })
                .collect())
        })
    }

    pub fn recent_games(&self, league: League) -> DataResult<Vec<GameResult>> {
        let today = Local::now().date_naive();
        self.recent_games_as_of(league, today)
    }

    /// Recent games dated relative to `today`
    ///
    /// No two games share the same unordered pair of teams.
    pub fn recent_games_as_of(&self, league: League, today: NaiveDate) -> DataResult<Vec<GameResult>> {
        self.with_rng_locked(|rng| {
            self.maybe_fail(rng, "recent games", league)?;
            let roster = league.roster();
            let max_pairs = roster.len() * roster.len().saturating_sub(1) / 2;
            let count = self.game_count.min(max_pairs);
            let scores = score_range(league);

            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            let mut games = Vec::with_capacity(count);
            while games.len() < count {
                let (Some(home), Some(away)) = (random_pick_with(rng, roster), random_pick_with(rng, roster)) else {
                    break;
                };
                if home == away || !seen.insert(pair_key(home, away)) {
                    continue;
                }
                let days_ago = random_int_with(rng, 0, RECENT_DAYS);
                games.push(GameResult {
                    id: games.len() as u32 + 1,
                    home_team: home.to_string(),
                    away_team: away.to_string(),
                    home_score: random_int_with(rng, *scores.start(), *scores.end()) as u32,
                    away_score: random_int_with(rng, *scores.start(), *scores.end()) as u32,
                    date: today - Duration::days(days_ago),
                    status: GameStatus::Final,
                });
            }
            Ok(games)
        })
    }

    pub fn dashboard_stats(&self, league: League) -> DataResult<DashboardStats> {
        self.with_rng_locked(|rng| {
            self.maybe_fail(rng, "dashboard stats", league)?;
            let scores = score_range(league);
            let low = (*scores.start() as f64).max(1.0);
            let high = *scores.end() as f64;
            let average = rng.gen_range(low..=high);
            Ok(DashboardStats {
                total_teams: league.roster().len(),
                games_today: random_int_with(rng, *GAMES_TODAY_RANGE.start(), *GAMES_TODAY_RANGE.end()) as u32,
                top_scorer: random_pick_with(rng, star_players(league))
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                average_score: (average * 10.0).round() / 10.0,
            })
        })
    }

    /// Teams and players whose names contain `query`
    pub fn search(&self, query: &str, league: League) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults {
                query: String::new(),
                hits: Vec::new(),
                message: Some("Please enter a search term".to_string()),
            };
        }

        let teams = league.roster().iter().map(|n| (SearchKind::Team, *n));
        let players = star_players(league).iter().map(|n| (SearchKind::Player, *n));
        let hits: Vec<SearchHit> = teams
            .chain(players)
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .take(MAX_SEARCH_HITS)
            .map(|(kind, name)| SearchHit { kind, name: name.to_string(), league })
            .collect();

        let message = hits
            .is_empty()
            .then(|| format!("No results found for \"{}\"", query.trim()));
        SearchResults {
            query: query.trim().to_string(),
            hits,
            message,
        }
    }
}

/// Order-independent key for a pairing
pub fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
