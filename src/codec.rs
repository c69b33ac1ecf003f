//! On-disk encodings for the account collection.
//!
//! JSON stores the collection as `{"accountList": [...]}`. CSV stores one
//! account per row under a `holderName,accountNumber,balance` header.
//! Zero-length or whitespace-only input decodes to an empty collection in
//! either format.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::csv_utils::{read_csv, write_csv};
use crate::dto::{Account, Accounts};
use crate::error::PersistenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Csv,
}

impl Format {
    /// Infers the format from a file extension; anything but `.csv` is JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown storage format `{other}`, expected json or csv")),
        }
    }
}

/// Decodes a whole collection. `path` only labels errors.
pub fn decode<R: Read>(
    format: Format,
    mut reader: R,
    path: &Path,
) -> Result<Accounts, PersistenceError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|source| PersistenceError::Io {
            path: path.to_owned(),
            source,
        })?;
    if raw.trim().is_empty() {
        return Ok(Accounts::default());
    }

    match format {
        Format::Json => serde_json::from_str(&raw).map_err(|source| PersistenceError::Json {
            path: path.to_owned(),
            source,
        }),
        Format::Csv => read_csv::<Account, _>(raw.as_bytes())
            .map(Accounts::new)
            .map_err(|source| csv_error(path, source)),
    }
}

/// Encodes a whole collection. `path` only labels errors.
pub fn encode<W: Write>(
    format: Format,
    mut writer: W,
    accounts: &Accounts,
    path: &Path,
) -> Result<(), PersistenceError> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, accounts).map_err(|source| {
                PersistenceError::Json {
                    path: path.to_owned(),
                    source,
                }
            })?;
            writer.flush().map_err(|source| PersistenceError::Io {
                path: path.to_owned(),
                source,
            })
        }
        Format::Csv => write_csv(writer, accounts.account_list.iter())
            .map_err(|source| csv_error(path, source)),
    }
}

fn csv_error(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Csv {
        path: path.to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Accounts {
        Accounts::new(vec![
            Account::new("S.Y Nadkarni", dec!(6789)).with_account_number("NL41ABNA098718882"),
            Account::new("Test Data", dec!(9999.25)).with_account_number("NL41ABNA008718790"),
        ])
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("data/accounts.csv"), Format::Csv);
        assert_eq!(Format::from_path("ACCOUNTS.CSV"), Format::Csv);
        assert_eq!(Format::from_path("accounts.json"), Format::Json);
        assert_eq!(Format::from_path("accounts"), Format::Json);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<Format>(), Ok(Format::Csv));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_empty_input_is_empty_collection() {
        let path = Path::new("empty");
        for format in [Format::Json, Format::Csv] {
            assert!(decode(format, "".as_bytes(), path).unwrap().is_empty());
            assert!(decode(format, "  \n".as_bytes(), path).unwrap().is_empty());
        }
    }

    #[test]
    fn test_json_preserves_order_and_values() {
        let path = Path::new("accounts.json");
        let mut buf = Vec::new();
        encode(Format::Json, &mut buf, &sample(), path).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("\"accountList\""));
        assert_eq!(decode(Format::Json, buf.as_slice(), path).unwrap(), sample());
    }

    #[test]
    fn test_csv_preserves_order_and_values() {
        let path = Path::new("accounts.csv");
        let mut buf = Vec::new();
        encode(Format::Csv, &mut buf, &sample(), path).unwrap();
        assert_eq!(decode(Format::Csv, buf.as_slice(), path).unwrap(), sample());
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let err = decode(Format::Json, "{not json".as_bytes(), Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, PersistenceError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_malformed_csv() {
        let data = "holderName,accountNumber,balance\nS.Y Nadkarni,NL41,not-a-number\n";
        let err = decode(Format::Csv, data.as_bytes(), Path::new("broken.csv")).unwrap_err();
        assert!(matches!(err, PersistenceError::Csv { .. }));
    }
}
