use std::sync::Arc;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use queue_cell::QueueDecayWorker;
use shared_config::AppConfig;
use shared_database::{InMemoryStore, SharedStore};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic queue API server");

    // Load configuration
    let config = Arc::new(AppConfig::from_env());

    let store: SharedStore = if config.seed_demo_data {
        Arc::new(InMemoryStore::seeded())
    } else {
        warn!("SEED_DEMO_DATA disabled, starting with an empty clinic");
        Arc::new(InMemoryStore::new())
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let decay_handle = QueueDecayWorker::from_config(store.clone(), &config)
        .map(|worker| worker.spawn(shutdown_rx));

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(store, config.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_err() {
                warn!("Unable to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(handle) = decay_handle {
        if let Err(e) = handle.await {
            warn!("Queue decay worker ended abnormally: {}", e);
        }
    }

    Ok(())
}
