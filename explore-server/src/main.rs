use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use explore_server::explore::ExploreConfig;
use explore_server::places::{MockPlacesClient, PlaceProvider, PlacesClient, PlacesConfig};
use explore_server::sessions::SessionStoreConfig;
use explore_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let addr: SocketAddr = std::env::var("EXPLORE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("EXPLORE_ADDR is not a socket address");

    // Fixture data replaces the live provider when set
    if let Ok(dir) = std::env::var("EXPLORE_MOCK_DATA") {
        let provider = MockPlacesClient::new(&dir).expect("Failed to load mock place data");
        info!(%dir, pages = provider.page_count(), "using mock place data");
        serve(provider, addr).await;
        return;
    }

    let api_key = std::env::var("PLACES_API_KEY").unwrap_or_else(|_| {
        warn!("PLACES_API_KEY not set. Provider calls will be denied.");
        String::new()
    });
    let provider =
        PlacesClient::new(PlacesConfig::new(api_key)).expect("Failed to create Places client");

    serve(provider, addr).await;
}

async fn serve<P: PlaceProvider + 'static>(provider: P, addr: SocketAddr) {
    let state = AppState::new(
        provider,
        ExploreConfig::default(),
        &SessionStoreConfig::default(),
    );
    let app = create_router(state);

    info!(%addr, "explore server listening");
    info!("  GET /health");
    info!("  GET /api/explore/search?session&keyword&city&country&sort");
    info!("  GET /api/explore/next?session");
    info!("  GET /api/explore/previous?session");
    info!("  GET /api/explore/sort?session&mode");
    info!("  GET /api/countries?q");
    info!("  GET /api/photo?reference&max_width");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
