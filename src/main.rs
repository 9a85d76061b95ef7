use std::{net::SocketAddr, sync::Arc};

use axum::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_web_api_rust::{route::create_router, AppState};

// Entry point of the application
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create an Arc-wrapped instance of the application state. All data
    // lives in process memory and is gone on restart.
    let app_state = Arc::new(AppState::new());

    let app = create_router(app_state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!("server listening on {}", addr);

    // Start the Axum server
    if let Err(err) = Server::bind(&addr).serve(app.into_make_service()).await {
        tracing::error!("server error: {}", err);
        std::process::exit(1);
    }
}
