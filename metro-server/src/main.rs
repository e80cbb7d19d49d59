use std::net::SocketAddr;

use metro_server::network::catalog::cdmx_network;
use metro_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Build the static network once; it is read-only from here on
    let network = cdmx_network();
    println!(
        "Loaded {} stations, {} directed edges",
        network.station_count(),
        network.edge_count()
    );

    let state = AppState::new(network);
    let app = create_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Metro route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/stations  - Station catalog");
    println!("  POST /api/route     - Plan a route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
