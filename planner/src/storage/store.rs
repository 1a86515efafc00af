//! Store backends
//!
//! The persisted state is one envelope record in one slot, so the store
//! abstraction is deliberately narrow: get/set/delete of a single string.
//! The handle is passed in explicitly, which keeps `DayStore` and the
//! cleanup policy testable without touching the real filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;

/// A single-slot key-value store holding the serialized envelope
pub trait Store {
    fn get(&self) -> Result<Option<String>, StoreError>;
    fn set(&mut self, raw: &str) -> Result<(), StoreError>;
    fn delete(&mut self) -> Result<(), StoreError>;
}

/// In-memory store, used in tests and as a no-persistence fallback
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn set(&mut self, raw: &str) -> Result<(), StoreError> {
        self.slot = Some(raw.to_string());
        Ok(())
    }

    fn delete(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// File-backed store: the envelope lives in one JSON file on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
