use catalog_server::{build_router, open_collection, AppConfig, AppResult, AppState};
use catalog_store::seed::seed_if_empty;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "catalog_server=debug,catalog_store=debug,tower_http=debug,axum=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog server...");
    tracing::info!("Loading configuration...");
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}", e);
            tracing::info!("Using default configuration...");
            AppConfig::default()
        }
    };
    tracing::info!("Configuration loaded successfully");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    let authors = open_collection(&config.store)?;

    if config.store.seed_demo_data {
        seed_if_empty(authors.as_ref()).await?;
    }

    let addr = config.socket_addr()?;
    let app = build_router(AppState::new(authors));

    tracing::debug!("Registered routes:");
    tracing::debug!("  GET /");
    tracing::debug!("  GET /authors");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
