//! CSV serialization and deserialization utilities.
//!
//! Provides generic functions for reading and writing CSV data.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Reads every CSV record from a reader, deserializing each into type T.
/// The first row is the header. Only header names are trimmed; field values
/// are returned exactly as written.
pub fn read_csv<T, R>(reader: R) -> csv::Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader)
        .into_deserialize()
        .collect()
}

/// Writes an iterator of records to a CSV writer.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let data = "holderName, accountNumber, balance
S.Y Nadkarni,NL41ABNA098718882,6789
Test Data,NL41ABNA008718790,9999
";
        let accounts: Vec<Account> = read_csv(data.as_bytes())?;

        let expected_accounts = vec![
            Account::new("S.Y Nadkarni", dec!(6789)).with_account_number("NL41ABNA098718882"),
            Account::new("Test Data", dec!(9999)).with_account_number("NL41ABNA008718790"),
        ];
        assert_eq!(accounts, expected_accounts);
        Ok(())
    }

    #[test]
    fn test_read_csv_keeps_field_whitespace() -> csv::Result<()> {
        let data = "holderName,accountNumber,balance\n T.T Rebels ,NL31ABNA01234567,1\n";
        let accounts: Vec<Account> = read_csv(data.as_bytes())?;
        assert_eq!(accounts[0].holder_name.as_deref(), Some(" T.T Rebels "));
        Ok(())
    }

    #[test]
    fn test_write_csv() -> Result<(), Box<dyn std::error::Error>> {
        let accounts = vec![
            Account::new("S.Y Nadkarni", dec!(6789)).with_account_number("NL41ABNA098718882"),
            Account::new("Test Data", dec!(9999)),
        ];
        let mut output = Vec::new();
        write_csv(&mut output, accounts.iter())?;

        let expected = "holderName,accountNumber,balance
S.Y Nadkarni,NL41ABNA098718882,6789
Test Data,,9999
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }
}
