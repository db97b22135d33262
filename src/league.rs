/// League selection and fixed team rosters
///
/// Each league maps to a static roster table. The external feed only knows
/// about the four North American leagues; EPL is served from mock data only.
use phf::phf_map;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum League {
    #[default]
    Nba,
    Nfl,
    Mlb,
    Nhl,
    Epl,
}

static LEAGUE_CODES: phf::Map<&'static str, League> = phf_map! {
    "nba" => League::Nba,
    "nfl" => League::Nfl,
    "mlb" => League::Mlb,
    "nhl" => League::Nhl,
    "epl" => League::Epl,
};

const NBA_TEAMS: &[&str] = &[
    "Los Angeles Lakers",
    "Boston Celtics",
    "Golden State Warriors",
    "Miami Heat",
    "Chicago Bulls",
    "Brooklyn Nets",
    "Milwaukee Bucks",
    "Phoenix Suns",
    "Dallas Mavericks",
    "Denver Nuggets",
    "Philadelphia 76ers",
    "Los Angeles Clippers",
];

const NFL_TEAMS: &[&str] = &[
    "Kansas City Chiefs",
    "Buffalo Bills",
    "Philadelphia Eagles",
    "San Francisco 49ers",
    "Dallas Cowboys",
    "Cincinnati Bengals",
    "Baltimore Ravens",
    "Miami Dolphins",
    "Detroit Lions",
    "Green Bay Packers",
];

const MLB_TEAMS: &[&str] = &[
    "New York Yankees",
    "Los Angeles Dodgers",
    "Houston Astros",
    "Atlanta Braves",
    "Boston Red Sox",
    "Chicago Cubs",
    "San Diego Padres",
    "Toronto Blue Jays",
    "Seattle Mariners",
    "St. Louis Cardinals",
];

const NHL_TEAMS: &[&str] = &[
    "Toronto Maple Leafs",
    "Boston Bruins",
    "Colorado Avalanche",
    "Edmonton Oilers",
    "Tampa Bay Lightning",
    "New York Rangers",
    "Vegas Golden Knights",
    "Carolina Hurricanes",
    "Dallas Stars",
    "Florida Panthers",
];

const EPL_TEAMS: &[&str] = &[
    "Manchester City",
    "Arsenal",
    "Liverpool",
    "Manchester United",
    "Chelsea",
    "Tottenham Hotspur",
    "Newcastle United",
    "Aston Villa",
    "Brighton",
    "West Ham United",
];

impl League {
    pub fn all() -> [Self; 5] {
        [Self::Nba, Self::Nfl, Self::Mlb, Self::Nhl, Self::Epl]
    }

    /// Lower-case code used in URLs, config and the CLI
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nba => "nba",
            Self::Nfl => "nfl",
            Self::Mlb => "mlb",
            Self::Nhl => "nhl",
            Self::Epl => "epl",
        }
    }

    /// Upper-case label for headers and listings
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Nba => "NBA",
            Self::Nfl => "NFL",
            Self::Mlb => "MLB",
            Self::Nhl => "NHL",
            Self::Epl => "EPL",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nba => "NBA",
            Self::Nfl => "NFL",
            Self::Mlb => "MLB",
            Self::Nhl => "NHL",
            Self::Epl => "Premier League",
        }
    }

    pub fn roster(&self) -> &'static [&'static str] {
        match self {
            Self::Nba => NBA_TEAMS,
            Self::Nfl => NFL_TEAMS,
            Self::Mlb => MLB_TEAMS,
            Self::Nhl => NHL_TEAMS,
            Self::Epl => EPL_TEAMS,
        }
    }

    /// EPL has no external feed
    pub fn is_mock_only(&self) -> bool {
        matches!(self, Self::Epl)
    }

    /// Parse a league code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        LEAGUE_CODES.get(code.trim().to_lowercase().as_str()).copied()
    }

    /// Position in `all()`, used for the tab bar and number keys
    pub fn index(&self) -> usize {
        Self::all().iter().position(|l| l == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
