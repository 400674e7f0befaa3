// Account record - the only persisted entity
//
// Identity is the integer `id` assigned by the store on creation.
// `name` and `balance` are values and are replaced wholesale on update.

use serde::{Deserialize, Serialize};

/// Maximum account name length, counted in characters
pub const NAME_MAX_LEN: usize = 100;

/// A persisted account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-generated identifier, immutable after creation
    pub id: i64,

    /// Display name (1..=100 characters)
    pub name: String,

    /// Current balance
    pub balance: f64,
}

impl Account {
    pub fn new(id: i64, name: impl Into<String>, balance: f64) -> Self {
        Account {
            id,
            name: name.into(),
            balance,
        }
    }

    /// Overwrite the mutable values in place, keeping the identity
    pub fn apply(&mut self, update: &AccountUpdate) {
        self.name = update.name.clone();
        self.balance = update.balance;
    }
}

/// Account that has not been stored yet (seeding / insert path)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub balance: f64,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        NewAccount {
            name: name.into(),
            balance,
        }
    }

    pub fn with_id(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            balance: self.balance,
        }
    }
}

/// Full replacement of an existing account's values, built from a PUT
/// body by `validation::validate_update`
#[derive(Debug, Clone, PartialEq)]
pub struct AccountUpdate {
    pub id: i64,
    pub name: String,
    pub balance: f64,
}
