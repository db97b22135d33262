use cached::proc_macro::cached;

use crate::api::ExternalClient;
use crate::error::DataError;
use crate::league::League;

pub use cached::Cached;

/// Seconds a successful feed response is reused
pub const FEED_CACHE_LIFESPAN_SECS: u64 = 30;

/// Feed bodies keyed by request URL; failures are never cached
#[cached(
    name = "FEED_CACHE",
    type = "cached::TimedSizedCache<String, serde_json::Value>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(16, FEED_CACHE_LIFESPAN_SECS) }",
    convert = r#"{ feed_key(client, league, endpoint) }"#,
    result = true
)]
pub async fn fetch_feed_cached(
    client: &ExternalClient,
    league: League,
    endpoint: &str,
) -> Result<serde_json::Value, DataError> {
    client.get_json(league, endpoint).await
}

/// The full URL, so clients with different seasons or hosts never share bodies
pub fn feed_key(client: &ExternalClient, league: League, endpoint: &str) -> String {
    client.endpoint_url(league, endpoint)
}

/// Forget every cached body for a league so the next fetch hits the feed
pub async fn invalidate_league(client: &ExternalClient, league: League, endpoints: &[&str]) {
    let mut cache = FEED_CACHE.lock().await;
    for endpoint in endpoints {
        cache.cache_remove(&feed_key(client, league, endpoint));
    }
}
