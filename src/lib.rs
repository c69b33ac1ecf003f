mod codec;
mod config;
mod csv_utils;
mod dto;
mod error;
mod iban;
mod service;
mod stores;

pub use codec::Format;
pub use config::{Config, ConfigError, DEFAULT_BANK_CODE, DEFAULT_COUNTRY, DEFAULT_STORE_PATH};
pub use dto::{Account, Accounts, ReadAccountInput};
pub use error::{
    Error, PersistenceError, ACCOUNT_HOLDER_EXISTS, NO_ACCOUNT_HOLDER_NAME, NO_ACCOUNT_NUMBER,
    NULL_PARAMETER,
};
pub use iban::{is_valid_iban, IbanGenerator, RandomIbanGenerator};
pub use service::AccountService;
pub use stores::{FileStore, MemoryStore, StorageBackend};
