use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bike_server::feed::{CityBikesClient, CityBikesConfig, FeedSource, MockFeedClient};
use bike_server::store::{MarkerStore, SnapshotCache, SnapshotCacheConfig};
use bike_server::web::{AppState, MapConfig, create_router};

/// Default network slug when BIKES_NETWORK is not set.
const DEFAULT_NETWORK: &str = "citi-bike-miami";

/// Default snapshot refresh interval in seconds.
const DEFAULT_REFRESH_SECS: u64 = 60;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let network = std::env::var("BIKES_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());

    let refresh_secs = std::env::var("BIKES_REFRESH_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);

    // Build the feed source: a local mock file takes precedence over the
    // live API when BIKES_MOCK_DATA is set.
    let feed = match std::env::var("BIKES_MOCK_DATA") {
        Ok(path) => {
            println!("Serving mock data from {path}");
            let client = MockFeedClient::new(&path).expect("Failed to load mock data");
            FeedSource::Mock(client)
        }
        Err(_) => {
            let mut config = CityBikesConfig::new(network.as_str());
            if let Ok(url) = std::env::var("BIKES_API_URL") {
                config = config.with_base_url(url);
            }
            let client = CityBikesClient::new(config).expect("Failed to create feed client");
            FeedSource::Live(client)
        }
    };

    let store = Arc::new(MarkerStore::new());

    let cache_config = match std::env::var("BIKES_CACHE_PATH") {
        Ok(path) => SnapshotCacheConfig::new(path),
        Err(_) => SnapshotCacheConfig::default(),
    };
    let cache = SnapshotCache::new(cache_config);

    // Seed from the disk cache so a restart shows markers before the
    // first live fetch completes.
    if let Some(stations) = cache.load() {
        match store.apply_snapshot(&stations).await {
            Ok(outcome) => println!("Seeded {} markers from snapshot cache", outcome.accepted),
            Err(e) => eprintln!("Ignoring cached snapshot: {e}"),
        }
    }

    // Spawn the snapshot refresh loop.
    let refresh_store = store.clone();
    let refresh_cache = cache.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));
        loop {
            interval.tick().await;
            match feed.fetch_stations().await {
                Ok(stations) => {
                    match refresh_store.apply_snapshot(&stations).await {
                        Ok(outcome) => {
                            tracing::debug!(
                                accepted = outcome.accepted,
                                rejected = outcome.rejected,
                                "refreshed station snapshot"
                            );
                            if let Err(e) = refresh_cache.save(&stations) {
                                tracing::warn!("failed to write snapshot cache: {e}");
                            }
                        }
                        // Previous markers stay on screen; try again next tick.
                        Err(e) => tracing::warn!("rejected station snapshot: {e}"),
                    }
                }
                Err(e) => tracing::warn!("failed to fetch stations: {e}"),
            }
        }
    });

    // Build app state and router
    let state = AppState::new(store, MapConfig::default());
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 4001));
    println!("City bike map for '{network}' listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /             - Map page");
    println!("  GET  /health       - Health check");
    println!("  GET  /api/markers  - Current markers as JSON");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
