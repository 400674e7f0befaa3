// Store collaborator - find / save / delete by identifier
//
// The facade only ever talks to `dyn AccountStore`, so the backing
// engine is chosen by whoever builds the service.

use crate::account::{Account, NewAccount};
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Persistence operations over the account table
pub trait AccountStore: Send + Sync {
    /// SELECT by primary key
    fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    /// SELECT *, ordered by id
    fn find_all(&self) -> Result<Vec<Account>>;

    /// Upsert by id: replace name/balance when the row exists, insert it otherwise
    fn save(&self, account: &Account) -> Result<Account>;

    /// DELETE by primary key. Returns false when no row matched.
    fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Insert with a store-generated id
    fn insert(&self, account: &NewAccount) -> Result<Account>;

    fn count(&self) -> Result<usize>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Map-backed store, used for tests and `--memory` runs
pub struct MemoryAccountStore {
    inner: RwLock<MemoryInner>,
}

struct MemoryInner {
    accounts: BTreeMap<i64, Account>,
    next_id: i64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        MemoryAccountStore {
            inner: RwLock::new(MemoryInner {
                accounts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a store pre-filled with the given accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = NewAccount>) -> Result<Self> {
        let store = Self::new();
        for account in accounts {
            store.insert(&account)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, MemoryInner>> {
        self.inner
            .read()
            .map_err(|_| anyhow::anyhow!("account store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, MemoryInner>> {
        self.inner
            .write()
            .map_err(|_| anyhow::anyhow!("account store lock poisoned"))
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccountStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.read()?.accounts.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.accounts.values().cloned().collect())
    }

    fn save(&self, account: &Account) -> Result<Account> {
        let mut inner = self.write()?;
        if account.id >= inner.next_id {
            inner.next_id = account.id + 1;
        }
        inner.accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.write()?.accounts.remove(&id).is_some())
    }

    fn insert(&self, account: &NewAccount) -> Result<Account> {
        let mut inner = self.write()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = account.clone().with_id(id);
        inner.accounts.insert(id, stored.clone());
        Ok(stored)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.accounts.len())
    }
}
