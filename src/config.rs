use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// How an absent id is reported on GET / PUT / DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NotFoundPolicy {
    /// 404 with an error body
    #[default]
    NotFound,
    /// 200 with an empty body
    EmptyOk,
}

/// Server settings. Every flag falls back to an environment variable,
/// and `.env` is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(name = "account-server")]
#[command(about = "REST service for account records", long_about = None)]
pub struct ServerConfig {
    /// SQLite database file
    #[arg(long = "database", env = "DATABASE_PATH", default_value = "accounts.db")]
    pub database_path: PathBuf,

    /// Keep accounts in memory instead of SQLite
    #[arg(long, env = "MEMORY_STORE")]
    pub memory: bool,

    /// Listen address
    #[arg(long = "bind", env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: SocketAddr,

    #[arg(long, env = "NOT_FOUND_POLICY", value_enum, default_value_t = NotFoundPolicy::NotFound)]
    pub not_found_policy: NotFoundPolicy,

    /// CSV (`name,balance`) loaded into the store at startup
    #[arg(long = "seed", env = "SEED_CSV")]
    pub seed_csv: Option<PathBuf>,
}

impl ServerConfig {
    /// Load `.env` (if present) then parse flags and environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
