// Persistence adapter for Account records.
// No validation happens here; the service owns the field rules.

use crate::db::DbConnection;
use crate::entities::Account;
use crate::error::{AccountError, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::MutexGuard;

/// Storage operations over Account records, keyed by numeric id
pub trait AccountRepository: Send + Sync {
    /// Insert when `id` is `None` (the store assigns one), otherwise
    /// insert-or-overwrite the row with that id. Returns the persisted record.
    fn save(&self, account: &Account) -> Result<Account>;

    /// Overwrite name/document/phone of the row with the record's id.
    /// `None` when the record has no id or no such row exists; never inserts.
    fn update(&self, account: &Account) -> Result<Option<Account>>;

    fn find_all(&self) -> Result<Vec<Account>>;

    /// `None` when no row has this id
    fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    fn delete_all(&self) -> Result<()>;

    /// Remove the row matching the record's id. A record without id is ignored.
    fn delete(&self, account: &Account) -> Result<()>;

    fn count(&self) -> Result<i64>;
}

// ============================================================================
// SQLITE IMPLEMENTATION
// ============================================================================

pub struct SqliteAccountRepository {
    conn: DbConnection,
}

impl SqliteAccountRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| AccountError::Database(e.to_string()))
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        document: row.get(2)?,
        phone: row.get(3)?,
    })
}

impl AccountRepository for SqliteAccountRepository {
    fn save(&self, account: &Account) -> Result<Account> {
        let conn = self.lock()?;

        match account.id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO accounts (id, name, document, phone)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        document = excluded.document,
                        phone = excluded.phone",
                    params![id, account.name, account.document, account.phone],
                )?;
                Ok(account.clone())
            }
            None => {
                conn.execute(
                    "INSERT INTO accounts (name, document, phone) VALUES (?1, ?2, ?3)",
                    params![account.name, account.document, account.phone],
                )?;
                Ok(account.clone().with_id(conn.last_insert_rowid()))
            }
        }
    }

    fn update(&self, account: &Account) -> Result<Option<Account>> {
        let Some(id) = account.id else {
            return Ok(None);
        };

        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE accounts SET name = ?1, document = ?2, phone = ?3 WHERE id = ?4",
            params![account.name, account.document, account.phone, id],
        )?;

        if changed == 0 {
            Ok(None)
        } else {
            Ok(Some(account.clone()))
        }
    }

    fn find_all(&self) -> Result<Vec<Account>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, document, phone
             FROM accounts
             ORDER BY id ASC",
        )?;

        let accounts = stmt
            .query_map([], account_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(accounts)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        let conn = self.lock()?;

        let account = conn
            .query_row(
                "SELECT id, name, document, phone FROM accounts WHERE id = ?1",
                params![id],
                account_from_row,
            )
            .optional()?;

        Ok(account)
    }

    fn delete_all(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM accounts", [])?;
        Ok(())
    }

    fn delete(&self, account: &Account) -> Result<()> {
        let Some(id) = account.id else {
            return Ok(());
        };

        let conn = self.lock()?;
        conn.execute("DELETE FROM accounts WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn count(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count)
    }
}
