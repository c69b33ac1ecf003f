//! Storage layer for the account collection. Provides:
//! - The [`StorageBackend`] contract the service reads and writes through
//! - A file-backed store for JSON or CSV files ([`FileStore`])
//! - An in-process store for embedding and tests ([`MemoryStore`])
//!
//! Every call moves the whole collection. There is no partial update and no
//! locking; concurrent writers against the same file can race.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::dto::Accounts;
use crate::error::PersistenceError;

pub trait StorageBackend {
    /// Reads the entire persisted collection. A resource that does not exist
    /// yet is an empty collection, not an error.
    fn load(&self) -> Result<Accounts, PersistenceError>;

    /// Overwrites the persisted collection in full.
    fn persist(&self, accounts: &Accounts) -> Result<(), PersistenceError>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for &S {
    fn load(&self) -> Result<Accounts, PersistenceError> {
        (**self).load()
    }

    fn persist(&self, accounts: &Accounts) -> Result<(), PersistenceError> {
        (**self).persist(accounts)
    }
}
