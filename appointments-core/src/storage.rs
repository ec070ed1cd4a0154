//! Persistence of the appointment collection.
//!
//! The whole collection is stored as one JSON array under a fixed key.
//! Persistence is best-effort: `save` and `load` never fail. Storage errors
//! come back from `try_save`/`try_load` as a `StoreResult`, get logged, and
//! are then masked so the in-memory book stays the source of truth.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::appointment::Appointment;

/// Key under which the collection is stored.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A durable string slot per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// Backends
// =============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        // Write then rename so a crash never leaves a truncated blob
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-process store. Used for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like a full or disabled storage.
    pub fn read_only() -> Self {
        MemoryStore {
            slots: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Unavailable("store is read-only".into()));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Appointment store
// =============================================================================

/// Best-effort mirror of the appointment collection in a key-value store.
pub struct AppointmentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> AppointmentStore<S> {
    pub fn new(backend: S) -> Self {
        AppointmentStore { backend }
    }

    /// Write the full collection, overwriting what was there. Failures are
    /// logged and dropped.
    pub fn save(&mut self, appointments: &[Appointment]) {
        match self.try_save(appointments) {
            Ok(()) => debug!(count = appointments.len(), "saved appointments"),
            Err(e) => error!(error = %e, "could not save appointments"),
        }
    }

    /// Read the collection. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<Appointment> {
        match self.try_load() {
            Ok(Some(appointments)) => {
                debug!(count = appointments.len(), "loaded appointments");
                appointments
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not load appointments, starting empty");
                Vec::new()
            }
        }
    }

    pub fn try_save(&mut self, appointments: &[Appointment]) -> StoreResult<()> {
        let blob = serde_json::to_string(appointments)?;
        self.backend.set(APPOINTMENTS_KEY, &blob)
    }

    /// `Ok(None)` when nothing has been stored yet.
    ///
    /// The blob must be a JSON array. Records inside it that don't decode are
    /// skipped, as are repeats of an id already seen.
    pub fn try_load(&self) -> StoreResult<Option<Vec<Appointment>>> {
        let Some(blob) = self.backend.get(APPOINTMENTS_KEY)? else {
            return Ok(None);
        };

        let records: Vec<serde_json::Value> = serde_json::from_str(&blob)?;

        let mut appointments: Vec<Appointment> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Appointment>(record) {
                Ok(appt) if appointments.iter().any(|a| a.id == appt.id) => {
                    warn!(index, id = %appt.id, "skipping appointment with duplicate id");
                }
                Ok(appt) => appointments.push(appt),
                Err(e) => warn!(index, error = %e, "skipping unreadable appointment"),
            }
        }

        Ok(Some(appointments))
    }
}
