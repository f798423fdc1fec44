// Bank API - Core Library
// Exposes all modules for use in the CLI, the API server, and tests

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod repository;
pub mod schema;
pub mod service;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use db::{open_database, open_in_memory, setup_database, DbConnection};
pub use entities::Account;
pub use error::AccountError;
pub use repository::{AccountRepository, SqliteAccountRepository};
pub use schema::{Rule, SchemaValidator, ValidationError, ValidationResult};
pub use service::AccountService;

#[cfg(feature = "server")]
pub use api::{create_router, ApiError, AppState, ErrorBody};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
