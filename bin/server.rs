// Account Service - Web Server
// REST API over the account store with Axum

use anyhow::Result;
use std::sync::Arc;

use account_service::{
    api::{self, AppState},
    config::{init_tracing, ServerConfig},
    load_csv, AccountService, AccountStore, MemoryAccountStore, SqliteAccountStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load();
    init_tracing();

    let store: Arc<dyn AccountStore> = if config.memory {
        tracing::info!("Using in-memory account store");
        Arc::new(MemoryAccountStore::new())
    } else {
        let store = SqliteAccountStore::open(&config.database_path)?;
        tracing::info!("Database opened: {}", config.database_path.display());
        Arc::new(store)
    };

    let service = AccountService::new(store);

    if let Some(seed) = &config.seed_csv {
        let accounts = load_csv(seed)?;
        let inserted = service.seed(accounts)?;
        tracing::info!("Seeded {} accounts from {}", inserted, seed.display());
    }

    tracing::info!(
        "Not-found policy: {:?}, {} accounts stored",
        config.not_found_policy,
        service.count()?
    );

    let app = api::router(AppState::new(service, config.not_found_policy));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting account API server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
