use anyhow::{Context, Result};
use std::env;

use bank_api::config::load_dotenv;
use bank_api::logging::init_logging;
use bank_api::{open_database, AccountRepository, ServerConfig, SqliteAccountRepository};

fn main() -> Result<()> {
    load_dotenv();
    init_logging();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("init") => run_init()?,
        Some("list") => run_list()?,
        Some("reset") => run_reset()?,
        _ => print_usage(),
    }

    Ok(())
}

fn open_repository() -> Result<SqliteAccountRepository> {
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    let db = open_database(&config.database_path)?;
    Ok(SqliteAccountRepository::new(db))
}

fn run_init() -> Result<()> {
    let repo = open_repository()?;
    println!("✓ Database ready ({} accounts)", repo.count()?);
    Ok(())
}

fn run_list() -> Result<()> {
    let repo = open_repository()?;
    let accounts = repo.find_all()?;

    println!("{}", serde_json::to_string_pretty(&accounts)?);
    println!("✓ {} accounts", accounts.len());

    Ok(())
}

fn run_reset() -> Result<()> {
    let repo = open_repository()?;
    let before = repo.count()?;

    repo.delete_all()?;
    tracing::info!(removed = before, "Account store cleared");

    println!("✓ Removed {} accounts", before);
    println!("✓ Database contains {} accounts", repo.count()?);

    Ok(())
}

fn print_usage() {
    println!("bank-api {}", bank_api::VERSION);
    println!();
    println!("Usage: bank-api <command>");
    println!();
    println!("Commands:");
    println!("  init    Create the database and schema");
    println!("  list    Print every stored account as JSON");
    println!("  reset   Delete every stored account");
    println!();
    println!("Run the HTTP API with: cargo run --bin bank-server");
}
