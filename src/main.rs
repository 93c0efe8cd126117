use stock_trades_api::{create_router, MarketStore, ServerConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_trades_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Catalog and ledger live for the whole process
    let store = Arc::new(MarketStore::seeded());

    tracing::info!(
        "📈 Store seeded: {} stocks, {} trades",
        store.catalog().len(),
        store.ledger().len()
    );

    let app = create_router(store);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Stock Trades API running on http://{}", addr);
    tracing::info!("📊 Health check: http://{}/health", addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
