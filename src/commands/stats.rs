use crate::config::Config;
use crate::data_provider::SportsDataProvider;
use crate::formatting::format_header;
use crate::league::League;
use crate::types::DashboardStats;
use anyhow::{Context, Result};

/// Width of the label column
const LABEL_WIDTH: usize = 12;

pub fn format_stats(stats: &DashboardStats) -> String {
    let rows = [
        ("Teams", stats.total_teams.to_string()),
        ("Games Today", stats.games_today.to_string()),
        ("Top Scorer", stats.top_scorer.clone()),
        ("Avg Score", format!("{:.1}", stats.average_score)),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<width$} {}\n", label, value, width = LABEL_WIDTH))
        .collect()
}

pub async fn run(provider: &dyn SportsDataProvider, league: League, config: &Config) -> Result<()> {
    let stats = provider
        .fetch_dashboard_stats(league)
        .await
        .with_context(|| format!("Failed to fetch {} stats", league))?;

    let display = config.display();
    print!("{}", format_header(&format!("{} Summary", league.abbrev()), true, &display));
    print!("{}", format_stats(&stats));
    Ok(())
}
