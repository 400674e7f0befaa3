use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use account_service::{config, load_csv, AccountService, SqliteAccountStore};

#[derive(Parser, Debug)]
#[command(name = "account-service")]
#[command(about = "Manage the account database", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long = "database", env = "DATABASE_PATH", default_value = "accounts.db", global = true)]
    database_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import accounts from a `name,balance` CSV file
    Import { csv: PathBuf },
    /// Print every stored account
    List,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    config::init_tracing();

    let cli = Cli::parse();
    let store = SqliteAccountStore::open(&cli.database_path)?;
    let service = AccountService::new(Arc::new(store));

    match cli.command {
        Command::Import { csv } => run_import(&service, &csv),
        Command::List => run_list(&service),
    }
}

fn run_import(service: &AccountService, csv: &Path) -> Result<()> {
    let accounts = load_csv(csv)?;
    println!("Loaded {} accounts from {}", accounts.len(), csv.display());

    let inserted = service.seed(accounts)?;
    println!("Inserted {} accounts", inserted);
    println!("Database now holds {} accounts", service.count()?);

    Ok(())
}

fn run_list(service: &AccountService) -> Result<()> {
    let accounts = service.list()?;

    println!("{:>6}  {:<40}  {:>14}", "ID", "NAME", "BALANCE");
    for account in &accounts {
        println!("{:>6}  {:<40}  {:>14.2}", account.id, account.name, account.balance);
    }
    println!("{} accounts", accounts.len());

    Ok(())
}
