//! Schedule map persistence.
//!
//! The engine never touches storage. Callers load a [`ScheduleMap`],
//! run generation or conflict analysis on it, and write the result back
//! through a [`ScheduleStore`]. Serializing concurrent read-modify-write
//! cycles is the caller's job.
//!
//! A key with no stored value reads as an empty map.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::ScheduleMap;

/// Key under which the application keeps all faculty timetables.
pub const TIMETABLES_KEY: &str = "facultyTimetables";

/// Key-value storage for schedule maps.
pub trait ScheduleStore {
    /// Loads the map stored under `key`, or an empty map.
    fn get(&self, key: &str) -> StoreResult<ScheduleMap>;

    /// Replaces the map stored under `key`.
    fn put(&mut self, key: &str, schedules: &ScheduleMap) -> StoreResult<()>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    maps: HashMap<String, ScheduleMap>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<ScheduleMap> {
        Ok(self.maps.get(key).cloned().unwrap_or_default())
    }

    fn put(&mut self, key: &str, schedules: &ScheduleMap) -> StoreResult<()> {
        self.maps.insert(key.to_string(), schedules.clone());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Files hold the map as `{ "<faculty id>": [ {entry}, ... ] }`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl ScheduleStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<ScheduleMap> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored timetables, starting empty");
                Ok(ScheduleMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, schedules: &ScheduleMap) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(schedules)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), faculty = schedules.len(), "stored timetables");
        Ok(())
    }
}
