use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bank account record.
///
/// `account_number` stays `None` until the service assigns one on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub holder_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
}

impl Account {
    pub fn new(holder_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            holder_name: Some(holder_name.into()),
            account_number: None,
            balance,
        }
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    /// True when `other` names the same holder, ignoring case.
    pub(crate) fn same_holder(&self, other: &str) -> bool {
        self.holder_name
            .as_deref()
            .is_some_and(|name| case_fold(name).eq(case_fold(other)))
    }
}

/// Folds each char independently (upper, then lower) so context-sensitive
/// mappings such as a word-final sigma compare equal to their other forms.
fn case_fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

/// The full persisted account collection, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Accounts {
    #[serde(default)]
    pub account_list: Vec<Account>,
}

impl Accounts {
    pub fn new(account_list: Vec<Account>) -> Self {
        Self { account_list }
    }

    pub fn len(&self) -> usize {
        self.account_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.account_list.is_empty()
    }
}

impl FromIterator<Account> for Accounts {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadAccountInput {
    #[serde(default)]
    pub account_number: Option<String>,
}

impl ReadAccountInput {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: Some(account_number.into()),
        }
    }
}
