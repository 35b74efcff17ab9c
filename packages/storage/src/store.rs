// ABOUTME: Key-value store contract shared by every persistence backend
// ABOUTME: In-memory implementation used by tests and short-lived sessions

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::StorageError;

/// Byte-oriented key-value store
///
/// Methods take `&self`; backends keep their state behind interior
/// mutability and are meant to be driven from a single thread. Writes land in
/// the store's in-memory state immediately, `synchronize` makes them durable.
pub trait KeyValueStore {
    /// Raw bytes stored under `key`, if any
    fn data(&self, key: &str) -> Option<Vec<u8>>;

    /// Store raw bytes under `key`, replacing any previous value
    fn set_data(&self, key: &str, data: Vec<u8>);

    /// Delete the entry for `key`. Missing keys are ignored.
    fn remove(&self, key: &str);

    fn contains_key(&self, key: &str) -> bool {
        self.data(key).is_some()
    }

    /// Flush pending writes to durable storage
    fn synchronize(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        (**self).data(key)
    }

    fn set_data(&self, key: &str, data: Vec<u8>) {
        (**self).set_data(key, data)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn synchronize(&self) -> Result<(), StorageError> {
        (**self).synchronize()
    }
}

/// Volatile store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        self.values.borrow().get(key).cloned()
    }

    fn set_data(&self, key: &str, data: Vec<u8>) {
        self.values.borrow_mut().insert(key.to_string(), data);
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }

    fn contains_key(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}
