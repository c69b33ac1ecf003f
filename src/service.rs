//! Account management on top of a [`StorageBackend`].
//!
//! Every operation loads the collection fresh from the backend. Nothing is
//! cached between calls, so each call sees the latest persisted state. Only
//! a successful create writes, and it rewrites the whole collection.

use tracing::{debug, info, warn};

use crate::dto::{Account, ReadAccountInput};
use crate::error::{
    Error, ACCOUNT_HOLDER_EXISTS, NO_ACCOUNT_HOLDER_NAME, NO_ACCOUNT_NUMBER, NULL_PARAMETER,
};
use crate::iban::IbanGenerator;
use crate::stores::StorageBackend;

pub struct AccountService<S, G> {
    store: S,
    generator: G,
}

impl<S, G> AccountService<S, G>
where
    S: StorageBackend,
    G: IbanGenerator,
{
    pub fn new(store: S, generator: G) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an account and returns its freshly generated account number.
    ///
    /// # Errors
    /// * [`Error::Validation`] if the input is missing, has no holder name, or
    ///   a holder with the same name (ignoring case) already exists. Nothing is
    ///   written in these cases.
    /// * [`Error::Persistence`] if loading or writing the collection fails.
    pub fn create_account(&self, input: Option<Account>) -> Result<String, Error> {
        let mut account = input.ok_or_else(|| reject(NULL_PARAMETER))?;
        let holder_name = match account.holder_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_owned(),
            _ => return Err(reject(NO_ACCOUNT_HOLDER_NAME)),
        };

        let mut accounts = self.store.load()?;
        if accounts
            .account_list
            .iter()
            .any(|existing| existing.same_holder(&holder_name))
        {
            return Err(reject(ACCOUNT_HOLDER_EXISTS));
        }

        let account_number = self.generator.generate_iban();
        account.account_number = Some(account_number.clone());
        accounts.account_list.push(account);
        self.store.persist(&accounts)?;

        info!(%account_number, holder = %holder_name, "account created");
        Ok(account_number)
    }

    /// Looks up an account by its exact (case-sensitive) account number.
    /// `Ok(None)` means no account carries that number.
    pub fn read_account(&self, input: Option<ReadAccountInput>) -> Result<Option<Account>, Error> {
        let input = input.ok_or_else(|| reject(NULL_PARAMETER))?;
        let account_number = match input.account_number {
            Some(number) if !number.is_empty() => number,
            _ => return Err(reject(NO_ACCOUNT_NUMBER)),
        };

        let found = self
            .store
            .load()?
            .account_list
            .into_iter()
            .find(|account| account.account_number.as_deref() == Some(account_number.as_str()));
        if found.is_none() {
            debug!(%account_number, "no account found");
        }
        Ok(found)
    }

    /// All accounts in persisted order.
    pub fn retrieve_all_accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(self.store.load()?.account_list)
    }
}

fn reject(message: &str) -> Error {
    warn!(reason = message, "request rejected");
    Error::validation(message)
}
