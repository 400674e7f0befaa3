// Account Access Facade
//
// Translates the four CRUD operations into store calls. The store is
// injected through the constructor; there is no global repository.

use anyhow::Result;
use std::sync::Arc;

use crate::account::{Account, AccountUpdate, NewAccount};
use crate::store::AccountStore;
use crate::validation;

/// Result of an update attempt
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(Account),
    Missing,
}

/// Result of a delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Missing,
}

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        AccountService { store }
    }

    pub fn get(&self, id: i64) -> Result<Option<Account>> {
        tracing::info!(account_id = id, "get account");
        self.store.find_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Account>> {
        tracing::info!("list accounts");
        self.store.find_all()
    }

    /// Replace name and balance of an existing account.
    ///
    /// One existence read, then at most one write. A missing id leaves the
    /// store untouched.
    pub fn update(&self, update: AccountUpdate) -> Result<UpdateOutcome> {
        tracing::info!(account_id = update.id, "update account");

        let mut account = match self.store.find_by_id(update.id)? {
            Some(account) => account,
            None => {
                tracing::debug!(account_id = update.id, "update target missing");
                return Ok(UpdateOutcome::Missing);
            }
        };

        account.apply(&update);
        let saved = self.store.save(&account)?;

        Ok(UpdateOutcome::Updated(saved))
    }

    pub fn delete(&self, id: i64) -> Result<DeleteOutcome> {
        tracing::info!(account_id = id, "delete account");

        if self.store.find_by_id(id)?.is_none() {
            tracing::debug!(account_id = id, "delete target missing");
            return Ok(DeleteOutcome::Missing);
        }

        // A concurrent delete between the read and this write still counts as done
        self.store.delete_by_id(id)?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Insert seed accounts, skipping the ones that fail validation.
    /// Returns how many were stored.
    pub fn seed(&self, accounts: Vec<NewAccount>) -> Result<usize> {
        let mut inserted = 0;
        let mut skipped = 0;

        for account in accounts {
            if let Err(violations) = validation::validate_new(&account) {
                let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                tracing::warn!(name = %account.name, reasons = ?reasons, "skipping invalid seed account");
                skipped += 1;
                continue;
            }

            let stored = self.store.insert(&account)?;
            tracing::debug!(account_id = stored.id, "seeded account");
            inserted += 1;
        }

        tracing::info!(inserted, skipped, "seed complete");
        Ok(inserted)
    }

    pub fn count(&self) -> Result<usize> {
        self.store.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteAccountStore;
    use crate::store::MemoryAccountStore;

    fn service() -> AccountService {
        let store = MemoryAccountStore::with_accounts(vec![
            NewAccount::new("Savings", 100.0),
            NewAccount::new("Checking", 250.5),
        ])
        .unwrap();
        AccountService::new(Arc::new(store))
    }

    fn update(id: i64, name: &str, balance: f64) -> AccountUpdate {
        AccountUpdate {
            id,
            name: name.to_string(),
            balance,
        }
    }

    #[test]
    fn test_get_existing_and_missing() {
        let service = service();

        assert_eq!(service.get(1).unwrap(), Some(Account::new(1, "Savings", 100.0)));
        assert_eq!(service.get(-1).unwrap(), None);
    }

    #[test]
    fn test_list_matches_store() {
        let service = service();
        assert_eq!(service.list().unwrap().len(), service.count().unwrap());
    }

    #[test]
    fn test_update_existing_is_visible() {
        let service = service();

        let outcome = service.update(update(1, "Savings Updated", 125.15)).unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Updated(Account::new(1, "Savings Updated", 125.15))
        );
        assert_eq!(
            service.get(1).unwrap(),
            Some(Account::new(1, "Savings Updated", 125.15))
        );
    }

    #[test]
    fn test_update_missing_does_not_insert() {
        let service = service();

        let outcome = service.update(update(-1, "No Account", 19.99)).unwrap();

        assert_eq!(outcome, UpdateOutcome::Missing);
        assert_eq!(service.count().unwrap(), 2);
        assert!(service.get(-1).unwrap().is_none());
    }

    #[test]
    fn test_delete_existing_then_missing() {
        let service = service();

        assert_eq!(service.delete(2).unwrap(), DeleteOutcome::Deleted);
        assert!(service.get(2).unwrap().is_none());
        assert_eq!(service.delete(2).unwrap(), DeleteOutcome::Missing);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_seed_skips_invalid() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        let service = AccountService::new(Arc::new(store));

        let inserted = service
            .seed(vec![
                NewAccount::new("Savings", 100.0),
                NewAccount::new("", 5.0),
                NewAccount::new("x".repeat(101), 5.0),
                NewAccount::new("Checking", 0.0),
            ])
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(service.count().unwrap(), 2);
    }
}
