use crate::data_provider::SportsDataProvider;
use crate::league::League;
use crate::types::SearchResults;
use anyhow::{Context, Result};

pub fn format_results(results: &SearchResults) -> String {
    if let Some(message) = &results.message {
        return format!("{}\n", message);
    }
    let mut output = format!("Results for \"{}\":\n", results.query);
    for hit in &results.hits {
        output.push_str(&format!("  [{}] {} ({})\n", hit.kind.label(), hit.name, hit.league.abbrev()));
    }
    output
}

pub async fn run(provider: &dyn SportsDataProvider, query: &str, league: League) -> Result<()> {
    let results = provider
        .search(query, league)
        .await
        .with_context(|| format!("Failed to search {} for \"{}\"", league, query))?;

    print!("{}", format_results(&results));
    Ok(())
}
