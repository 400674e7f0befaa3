// Account Service - Core Library
// Exposes all modules for use in the CLI, the API server and tests

pub mod account;
pub mod config;
pub mod db;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use account::{Account, AccountUpdate, NewAccount, NAME_MAX_LEN};
pub use config::{NotFoundPolicy, ServerConfig};
pub use db::{load_csv, setup_database, SqliteAccountStore};
pub use service::{AccountService, DeleteOutcome, UpdateOutcome};
pub use store::{AccountStore, MemoryAccountStore};
pub use validation::{validate_update, FieldViolation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
