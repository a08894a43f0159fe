use axum::serve;
use moto_catalog::api::routes::create_router;
use moto_catalog::config::AppConfig;
use moto_catalog::seed;
use moto_catalog::store::{CatalogStore, MemoryStore, PostgresStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn)
        .init();

    println!("Moto Catalog: Motorcycle Catalog Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let app = match config.database_url() {
        Some(database_url) => {
            println!("Connecting to PostgreSQL...");
            let postgres_store =
                PostgresStore::new(&database_url, config.max_connections()).await?;

            println!("Running database migrations...");
            postgres_store.migrate().await?;

            build_app(Arc::new(postgres_store)).await?
        }
        None => {
            println!("No database configured, using in-memory store");
            build_app(Arc::new(MemoryStore::new())).await?
        }
    };

    run_server(app, &config).await?;

    Ok(())
}

async fn build_app<S: CatalogStore + 'static>(store: Arc<S>) -> anyhow::Result<axum::Router> {
    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
        println!("Seed data loaded successfully");
    }

    Ok(create_router().with_state(store))
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Moto catalog running on http://{}/catalog", bind_address);

    serve(listener, app).await?;

    Ok(())
}
