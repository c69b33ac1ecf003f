//! Runtime configuration: where the accounts live and how account numbers
//! are minted. The binary fills this from flags and `ACCOUNTS_*` environment
//! variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Format;
use crate::iban::RandomIbanGenerator;
use crate::service::AccountService;
use crate::stores::FileStore;

pub const DEFAULT_STORE_PATH: &str = "accounts.json";
pub const DEFAULT_COUNTRY: &str = "NL";
pub const DEFAULT_BANK_CODE: &str = "ABNA";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("country code must be 2 ASCII letters, got `{0}`")]
    InvalidCountry(String),
    #[error("bank code must be 4 ASCII letters, got `{0}`")]
    InvalidBankCode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
    /// Overrides the format inferred from `store_path`.
    pub format: Option<Format>,
    generator: RandomIbanGenerator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            format: None,
            generator: RandomIbanGenerator::default(),
        }
    }
}

impl Config {
    /// Fails if the country or bank code is malformed; see
    /// [`RandomIbanGenerator::new`].
    pub fn new(
        store_path: impl Into<PathBuf>,
        format: Option<Format>,
        country: &str,
        bank_code: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            store_path: store_path.into(),
            format,
            generator: RandomIbanGenerator::new(country, bank_code)?,
        })
    }

    pub fn store(&self) -> FileStore {
        match self.format {
            Some(format) => FileStore::with_format(&self.store_path, format),
            None => FileStore::new(&self.store_path),
        }
    }

    pub fn generator(&self) -> RandomIbanGenerator {
        self.generator.clone()
    }

    pub fn service(&self) -> AccountService<FileStore, RandomIbanGenerator> {
        AccountService::new(self.store(), self.generator())
    }
}
