pub mod games;
pub mod search;
pub mod standings;
pub mod stats;

use crate::league::League;
use crate::types::DataSource;

/// Title line shared by every command, e.g. "NBA Standings (mock)"
pub fn title(league: League, what: &str, source: DataSource) -> String {
    format!("{} {} ({})", league.abbrev(), what, source.tag())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_includes_source_tag() {
        assert_eq!(title(League::Nhl, "Standings", DataSource::External), "NHL Standings (external)");
        assert_eq!(title(League::Epl, "Recent Games", DataSource::Mock), "EPL Recent Games (mock)");
    }
}
