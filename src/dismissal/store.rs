//! Persistence backends for the dismissal slot.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info, warn};
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a dismissal store can report.
///
/// The tracker never propagates these to the host; they are logged and the
/// operation degrades (read becomes "not dismissed", write is dropped).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    /// The persisted record could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The storage backend refused access, e.g. a privacy mode that blocks
    /// persistent storage.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The single persisted dismissal slot.
///
/// Only one alert exists at a time, so the store holds at most one
/// fingerprint under one fixed key. Implementations map the slot onto
/// whatever origin-scoped key-value storage the host provides.
#[automock]
pub trait DismissalStore {
    /// Reads the persisted fingerprint, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Overwrites the slot with the given fingerprint.
    fn save(&mut self, fingerprint: &str) -> Result<(), StoreError>;
}

/// An in-process store, useful for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl DismissalStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, fingerprint: &str) -> Result<(), StoreError> {
        self.record = Some(fingerprint.to_owned());
        Ok(())
    }
}

/// The persisted record, stored as a small JSON document.
#[derive(Serialize, Deserialize)]
struct DismissalRecord {
    fingerprint: String,
}

/// A file-backed store holding the slot at one well-known path.
///
/// Load is fault-tolerant: a missing file means the alert was never
/// dismissed and a corrupt file is ignored with a warning, so a damaged
/// record can never stop the page from working - the alert simply shows
/// again.
///
/// # Examples
///
/// ```no_run
/// use site_alerts::{DismissalStore, FileStore};
///
/// let mut store = FileStore::new("dismissal.json");
/// store.save("fingerprint").unwrap();
/// assert_eq!(store.load().unwrap().as_deref(), Some("fingerprint"));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path of the JSON file holding the record.
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl DismissalStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no dismissal record at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<DismissalRecord>(&raw) {
            Ok(record) => Ok(Some(record.fingerprint)),
            Err(e) => {
                warn!("ignoring corrupt dismissal record: {e}");
                Ok(None)
            }
        }
    }

    fn save(&mut self, fingerprint: &str) -> Result<(), StoreError> {
        let record = DismissalRecord {
            fingerprint: fingerprint.to_owned(),
        };
        let serialized = serde_json::to_string(&record)?;
        fs::write(&self.path, serialized)?;

        info!("persisted dismissal record");

        Ok(())
    }
}
