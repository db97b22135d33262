use crate::commands::title;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::SportsDataProvider;
use crate::formatting::{format_header, pad_right};
use crate::league::League;
use crate::types::TeamStanding;
use crate::utils::{sort_by_key, SortDirection};
use anyhow::{Context, Result};

// Layout Constants
/// Width of the whole table
const STANDINGS_TABLE_WIDTH: usize = 50;

/// Width of team name column
const TEAM_NAME_COL_WIDTH: usize = 25;

/// Width of games played column
const GP_COL_WIDTH: usize = 3;

/// Width of wins and losses columns
const WL_COL_WIDTH: usize = 3;

/// Width of win percentage column
const PCT_COL_WIDTH: usize = 5;

/// Width of streak column
const STRK_COL_WIDTH: usize = 4;

pub fn format_standings_table(standings: &[TeamStanding], display: &DisplayConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>2} {} {:>gp$} {:>wl$} {:>wl$} {:>pct$} {:>strk$}\n",
        "#",
        pad_right("Team", TEAM_NAME_COL_WIDTH),
        "GP",
        "W",
        "L",
        "PCT",
        "STRK",
        gp = GP_COL_WIDTH,
        wl = WL_COL_WIDTH,
        pct = PCT_COL_WIDTH,
        strk = STRK_COL_WIDTH,
    ));
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(STANDINGS_TABLE_WIDTH)
    ));

    for (i, team) in standings.iter().enumerate() {
        output.push_str(&format!(
            "{:>2} {} {:>gp$} {:>wl$} {:>wl$} {:>pct$} {:>strk$}\n",
            i + 1,
            pad_right(&team.name, TEAM_NAME_COL_WIDTH),
            team.games_played,
            team.wins,
            team.losses,
            team.win_percentage,
            team.streak.to_string(),
            gp = GP_COL_WIDTH,
            wl = WL_COL_WIDTH,
            pct = PCT_COL_WIDTH,
            strk = STRK_COL_WIDTH,
        ));
    }
    output
}

pub async fn run(provider: &dyn SportsDataProvider, league: League, config: &Config) -> Result<()> {
    let standings = provider
        .fetch_standings(league)
        .await
        .with_context(|| format!("Failed to fetch {} standings", league))?;

    let display = config.display();
    let sorted = sort_by_key(&standings.data, "win_percentage", SortDirection::Descending);
    print!("{}", format_header(&title(league, "Standings", standings.source), true, &display));
    print!("{}", format_standings_table(&sorted, &display));
    Ok(())
}
