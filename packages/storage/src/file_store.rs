// ABOUTME: JSON-file-backed key-value store
// ABOUTME: Keeps values in memory and writes the whole file on synchronize

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::store::KeyValueStore;
use crate::StorageError;

/// Current version of the store file format
pub const STORE_FILE_VERSION: u32 = 1;

/// On-disk layout: payloads are base64 so the file stays valid JSON for any bytes
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Key-value store persisted as a single JSON file
///
/// Reads and writes hit the in-memory map. Changes are only written to disk
/// by [`synchronize`](KeyValueStore::synchronize).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RefCell<BTreeMap<String, Vec<u8>>>,
    dirty: Cell<bool>,
}

impl FileStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = Self::load(&path)?;
        debug!(path = %path.display(), entries = values.len(), "Opened settings store");

        Ok(Self {
            path,
            values: RefCell::new(values),
            dirty: Cell::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when there are changes not yet written to disk
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.borrow().keys().cloned().collect()
    }

    fn load(path: &Path) -> Result<BTreeMap<String, Vec<u8>>, StorageError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let file: StoreFile =
            serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        if file.version != STORE_FILE_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        file.values
            .into_iter()
            .map(|(key, encoded)| match BASE64.decode(encoded.as_bytes()) {
                Ok(bytes) => Ok((key, bytes)),
                Err(source) => Err(StorageError::InvalidPayload { key, source }),
            })
            .collect()
    }

    fn write_file(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = StoreFile {
            version: STORE_FILE_VERSION,
            values: self
                .values
                .borrow()
                .iter()
                .map(|(key, bytes)| (key.clone(), BASE64.encode(bytes)))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        // Write next to the target and rename so a crash never leaves half a file
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        self.values.borrow().get(key).cloned()
    }

    fn set_data(&self, key: &str, data: Vec<u8>) {
        self.values.borrow_mut().insert(key.to_string(), data);
        self.dirty.set(true);
    }

    fn remove(&self, key: &str) {
        if self.values.borrow_mut().remove(key).is_some() {
            self.dirty.set(true);
        }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }

    fn synchronize(&self) -> Result<(), StorageError> {
        if !self.dirty.get() {
            return Ok(());
        }

        if let Err(e) = self.write_file() {
            warn!(path = %self.path.display(), error = %e, "Failed to write settings store");
            return Err(e);
        }

        self.dirty.set(false);
        debug!(path = %self.path.display(), "Synchronized settings store");
        Ok(())
    }
}
