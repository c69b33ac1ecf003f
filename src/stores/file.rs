use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{self, Format};
use crate::dto::Accounts;
use crate::error::PersistenceError;
use crate::stores::StorageBackend;

/// Keeps the account collection in a single JSON or CSV file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: Format,
}

impl FileStore {
    /// Format is inferred from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Sibling of the target file, so the final rename stays on one filesystem.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("accounts"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageBackend for FileStore {
    fn load(&self) -> Result<Accounts, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Accounts::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let accounts = codec::decode(self.format, BufReader::new(file), &self.path)?;
        debug!(path = %self.path.display(), count = accounts.len(), "loaded accounts");
        Ok(accounts)
    }

    fn persist(&self, accounts: &Accounts) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        // Write and sync the staging file first; the target is only replaced
        // once the full collection is durably on disk.
        let staging = self.staging_path();
        let result = File::create(&staging)
            .map_err(|err| self.io_error(err))
            .and_then(|file| {
                codec::encode(self.format, BufWriter::new(&file), accounts, &self.path)?;
                file.sync_all().map_err(|err| self.io_error(err))
            })
            .and_then(|()| fs::rename(&staging, &self.path).map_err(|err| self.io_error(err)));

        if result.is_err() {
            let _ = fs::remove_file(&staging);
        } else {
            debug!(path = %self.path.display(), count = accounts.len(), "persisted accounts");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_follows_extension() {
        assert_eq!(FileStore::new("accounts.csv").format(), Format::Csv);
        assert_eq!(FileStore::new("accounts.json").format(), Format::Json);
        assert_eq!(
            FileStore::with_format("accounts.dat", Format::Csv).format(),
            Format::Csv
        );
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let store = FileStore::new("data/accounts.json");
        assert_eq!(store.staging_path(), PathBuf::from("data/accounts.json.tmp"));
    }
}
