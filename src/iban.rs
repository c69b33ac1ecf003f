//! Account number generation.
//!
//! Generated numbers follow the IBAN layout: country code, two ISO 13616
//! mod-97 check digits, a four-letter bank code and a ten-digit account
//! part, e.g. `NL91ABNA0417164300`. Uniqueness against existing accounts is
//! not checked; ten random digits make a collision unlikely for a small store.

use rand::Rng;

use crate::config::{ConfigError, DEFAULT_BANK_CODE, DEFAULT_COUNTRY};

const ACCOUNT_DIGITS: usize = 10;

pub trait IbanGenerator {
    fn generate_iban(&self) -> String;
}

impl<F> IbanGenerator for F
where
    F: Fn() -> String,
{
    fn generate_iban(&self) -> String {
        self()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomIbanGenerator {
    country: String,
    bank_code: String,
}

impl RandomIbanGenerator {
    /// `country` must be 2 ASCII letters and `bank_code` 4; both are trimmed
    /// and uppercased.
    pub fn new(country: &str, bank_code: &str) -> Result<Self, ConfigError> {
        let normalized_country =
            letters(country, 2).ok_or_else(|| ConfigError::InvalidCountry(country.into()))?;
        let normalized_bank_code =
            letters(bank_code, 4).ok_or_else(|| ConfigError::InvalidBankCode(bank_code.into()))?;
        Ok(Self {
            country: normalized_country,
            bank_code: normalized_bank_code,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }
}

impl Default for RandomIbanGenerator {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_owned(),
            bank_code: DEFAULT_BANK_CODE.to_owned(),
        }
    }
}

impl IbanGenerator for RandomIbanGenerator {
    fn generate_iban(&self) -> String {
        let mut rng = rand::thread_rng();
        let account: String = (0..ACCOUNT_DIGITS)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        let bban = format!("{}{}", self.bank_code, account);
        // Country and bank code are letters-only by construction, so every
        // character maps.
        let check = check_digits(&self.country, &bban).unwrap_or_default();
        format!("{}{:02}{}", self.country, check, bban)
    }
}

fn letters(value: &str, len: usize) -> Option<String> {
    let value = value.trim();
    (value.len() == len && value.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| value.to_ascii_uppercase())
}

/// Computes the two check digits for `country` + `bban`. `None` if either
/// holds anything but ASCII letters and digits.
pub fn check_digits(country: &str, bban: &str) -> Option<u32> {
    let rearranged = format!("{bban}{country}00");
    mod97(&rearranged).map(|rem| 98 - rem)
}

/// Structural IBAN check: shape plus a mod-97 remainder of one.
pub fn is_valid_iban(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    if !(15..=34).contains(&bytes.len()) {
        return false;
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) || !bytes[2..4].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return false;
    }
    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    mod97(&rearranged) == Some(1)
}

/// Remainder modulo 97 of the number formed by replacing each letter with
/// its two-digit value (A = 10 .. Z = 35). `None` on any other character.
fn mod97(s: &str) -> Option<u32> {
    let mut rem = 0u32;
    for c in s.chars() {
        let value = c.to_digit(36)?;
        rem = if value < 10 {
            (rem * 10 + value) % 97
        } else {
            (rem * 100 + value) % 97
        };
    }
    Some(rem)
}
