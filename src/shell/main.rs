use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use entertainment_agency::modules::entertainers::adapters::outbound::in_memory::InMemoryEntertainerStore;
use entertainment_agency::modules::entertainers::adapters::outbound::postgres::PostgresEntertainerStore;
use entertainment_agency::shell::config::Config;
use entertainment_agency::shell::graphql::GRAPHQL_PATH;
use entertainment_agency::shell::http::{ENTERTAINERS_PATH, router};
use entertainment_agency::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("entertainment_agency=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = match &config.database {
        Some(database) => {
            let store =
                PostgresEntertainerStore::connect(&database.url, database.max_connections).await?;
            store.migrate().await?;
            tracing::info!(
                max_connections = database.max_connections,
                "connected to PostgreSQL"
            );
            AppState::from_store(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory");
            AppState::from_store(Arc::new(InMemoryEntertainerStore::new()))
        }
    };

    let addr = config.bind_addr;
    tracing::info!("REST endpoint: http://{}{}", addr, ENTERTAINERS_PATH);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
