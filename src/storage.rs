use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error_utils;

/// Storage key for the live option list: a JSON array of strings.
pub const KEY_OPTIONS: &str = "foodOptions";
/// Storage key for the saved-list archive: a JSON object of name -> array.
pub const KEY_SAVED_LISTS: &str = "savedLists";

const STORAGE_FILE: &str = "storage.json";

/// String-keyed store of JSON values, backed by a single file. Writes are
/// synchronous and best-effort; a missing or corrupt value on read degrades
/// to "no saved state" rather than failing the session.
pub struct Storage {
    path: PathBuf
}

impl Storage {
    pub fn new(path: PathBuf) -> Storage {
        Storage { path }
    }

    pub fn at_default_location() -> Result<Storage, io::Error> {
        let project_dirs = ProjectDirs::from("", "", "lunchpick")
            .ok_or_else(|| error_utils::error("Failed to resolve a data directory".to_string()))?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Storage::new(data_dir.join(STORAGE_FILE)))
    }

    pub fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut values = self.read_all();
        let value = values.remove(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Discarding corrupt value for key '{}': {}", key, e);
                None
            }
        }
    }

    pub fn write_key<T: Serialize>(&self, key: &str, value: &T) {
        let mut values = self.read_all();
        match serde_json::to_value(value) {
            Ok(encoded) => {
                values.insert(key.to_owned(), encoded);
            },
            Err(e) => {
                log::warn!("Failed to serialize value for key '{}': {}", key, e);
                return;
            }
        }
        let serialized = match serde_json::to_string_pretty(&Value::Object(values)) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize storage: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, serialized) {
            log::warn!("Failed to persist storage to {}: {}", self.path.display(), e);
        }
    }

    fn read_all(&self) -> Map<String, Value> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                // First run, or the file went away. Either way: empty state.
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(values)) => values,
            Ok(_) => {
                log::warn!("Storage file {} is not a JSON object, starting empty", self.path.display());
                Map::new()
            },
            Err(e) => {
                log::warn!("Storage file {} is corrupt ({}), starting empty", self.path.display(), e);
                Map::new()
            }
        }
    }
}
