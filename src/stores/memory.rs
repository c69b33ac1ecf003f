use std::cell::{Cell, RefCell};

use crate::dto::Accounts;
use crate::error::PersistenceError;
use crate::stores::StorageBackend;

/// Keeps the collection in process memory.
///
/// Loads hand out a copy, so callers never share state with the store
/// between calls. Counts persists so callers can tell whether a write
/// happened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RefCell<Accounts>,
    persist_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Accounts) -> Self {
        Self {
            accounts: RefCell::new(accounts),
            persist_count: Cell::new(0),
        }
    }

    /// Current persisted state.
    pub fn snapshot(&self) -> Accounts {
        self.accounts.borrow().clone()
    }

    pub fn persist_count(&self) -> usize {
        self.persist_count.get()
    }
}

impl StorageBackend for MemoryStore {
    fn load(&self) -> Result<Accounts, PersistenceError> {
        Ok(self.snapshot())
    }

    fn persist(&self, accounts: &Accounts) -> Result<(), PersistenceError> {
        *self.accounts.borrow_mut() = accounts.clone();
        self.persist_count.set(self.persist_count.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.persist_count(), 0);
    }

    #[test]
    fn test_persist_replaces_state() {
        let store = MemoryStore::with_accounts(Accounts::new(vec![Account::new(
            "Test Data",
            dec!(9999),
        )]));

        let replacement = Accounts::new(vec![Account::new("T.T Rebels", dec!(1))]);
        store.persist(&replacement).unwrap();

        assert_eq!(store.load().unwrap(), replacement);
        assert_eq!(store.persist_count(), 1);
    }

    #[test]
    fn test_loaded_copy_is_detached() {
        let store = MemoryStore::new();
        let mut loaded = store.load().unwrap();
        loaded.account_list.push(Account::new("T.T Rebels", dec!(1)));
        assert!(store.load().unwrap().is_empty());
    }
}
