use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::account::{Account, NewAccount};
use crate::store::AccountStore;

pub fn setup_database(conn: &Connection) -> Result<()> {
    // WAL for crash recovery (ignored by in-memory databases)
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS account (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
            balance REAL NOT NULL
        )",
        [],
    )
    .context("Failed to create account table")?;

    Ok(())
}

/// Load seed accounts from a CSV file with `name,balance` headers
pub fn load_csv(csv_path: &Path) -> Result<Vec<NewAccount>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;

    let mut accounts = Vec::new();
    for result in rdr.deserialize() {
        let account: NewAccount = result.context("Failed to deserialize account")?;
        accounts.push(account);
    }

    Ok(accounts)
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        balance: row.get(2)?,
    })
}

/// SQLite-backed account store
pub struct SqliteAccountStore {
    conn: Mutex<Connection>,
}

impl SqliteAccountStore {
    /// Open (or create) a database file and make sure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        setup_database(&conn)?;
        Ok(SqliteAccountStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("database connection lock poisoned"))
    }
}

impl AccountStore for SqliteAccountStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        let conn = self.conn()?;
        let account = conn
            .query_row(
                "SELECT id, name, balance FROM account WHERE id = ?1",
                params![id],
                account_from_row,
            )
            .optional()
            .with_context(|| format!("Failed to select account {}", id))?;

        Ok(account)
    }

    fn find_all(&self) -> Result<Vec<Account>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name, balance FROM account ORDER BY id")?;

        let accounts = stmt
            .query_map([], account_from_row)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to select accounts")?;

        Ok(accounts)
    }

    fn save(&self, account: &Account) -> Result<Account> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO account (id, name, balance) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, balance = excluded.balance",
            params![account.id, account.name, account.balance],
        )
        .with_context(|| format!("Failed to save account {}", account.id))?;

        Ok(account.clone())
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let removed = conn
            .execute("DELETE FROM account WHERE id = ?1", params![id])
            .with_context(|| format!("Failed to delete account {}", id))?;

        Ok(removed > 0)
    }

    fn insert(&self, account: &NewAccount) -> Result<Account> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO account (name, balance) VALUES (?1, ?2)",
            params![account.name, account.balance],
        )
        .context("Failed to insert account")?;

        Ok(account.clone().with_id(conn.last_insert_rowid()))
    }

    fn count(&self) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM account", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}
