use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Keyed in-memory store, persisted as a single JSON document.
pub type DB<T> = HashMap<String, T>;

#[derive(Debug)]
pub enum DBError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for DBError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DBError::Io(err) => write!(f, "io error: {}", err),
            DBError::Serde(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for DBError {}

impl From<std::io::Error> for DBError {
    fn from(err: std::io::Error) -> Self {
        DBError::Io(err)
    }
}

impl From<serde_json::Error> for DBError {
    fn from(err: serde_json::Error) -> Self {
        DBError::Serde(err)
    }
}

/// Load a store from `{location}/db.json`. A missing file is an empty store.
pub fn load_db<T: DeserializeOwned>(location: &str) -> Result<DB<T>, DBError> {
    let path = Path::new(location).join("db.json");
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the whole store to `{location}/db.json`, creating the directory
/// when needed.
pub fn save_db<T: Serialize>(location: &str, db: &DB<T>) -> Result<(), DBError> {
    fs::create_dir_all(location)?;
    let content = serde_json::to_string_pretty(db)?;
    fs::write(Path::new(location).join("db.json"), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn save_then_load_round_trips() {
        let location = env::temp_dir()
            .join(format!("eventboard_store_{}", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string();

        let mut db: DB<String> = HashMap::new();
        db.insert("k1".to_string(), "v1".to_string());
        save_db(&location, &db).expect("save should succeed");

        let loaded: DB<String> = load_db(&location).expect("load should succeed");
        assert_eq!(loaded.get("k1"), Some(&"v1".to_string()));
    }

    #[test]
    fn load_corrupt_file_is_an_error() {
        let location = env::temp_dir()
            .join(format!("eventboard_store_{}", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string();
        fs::create_dir_all(&location).unwrap();
        fs::write(Path::new(&location).join("db.json"), "not json {").unwrap();

        let loaded: Result<DB<String>, DBError> = load_db(&location);
        assert!(matches!(loaded, Err(DBError::Serde(_))));
    }

    #[test]
    fn load_missing_location_is_empty() {
        let loaded: DB<String> =
            load_db("/tmp/eventboard_store_does_not_exist").expect("load should succeed");
        assert!(loaded.is_empty());
    }
}
