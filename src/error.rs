//! Errors surfaced by the account service.
//!
//! Two kinds reach callers:
//! - [`Error::Validation`] for rejected input and business-rule violations
//!   (missing parameters, duplicate holders). Always raised before any write.
//! - [`Error::Persistence`] when the storage backend fails to load or persist
//!   the account collection. The underlying failure is kept as the source.
//!
//! A lookup that finds nothing is not an error; see
//! [`AccountService::read_account`](crate::AccountService::read_account).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const NULL_PARAMETER: &str = "null parameter not permitted";
pub const NO_ACCOUNT_HOLDER_NAME: &str = "no account holder name found";
pub const ACCOUNT_HOLDER_EXISTS: &str = "account holder already exists";
pub const NO_ACCOUNT_NUMBER: &str = "no account number found";

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl Error {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(vec![message.to_owned()])
    }

    /// Validation messages in the order they were raised. Empty for
    /// persistence failures.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            Self::Persistence(_) => &[],
        }
    }
}

/// Failure reading or writing the persisted account collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
