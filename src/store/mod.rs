//! Durable key-value storage for small pieces of dashboard state
//!
//! A minimal get/set/remove capability keeps the persistence concern behind
//! one seam: production uses a JSON-file-per-key store in an XDG data
//! directory, tests use an in-memory map.

pub mod recent;

pub use recent::RecentSearches;

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A small durable string-valued key-value store
///
/// Reads fail soft (`None` covers both "missing" and "unreadable"); writes
/// and removals report IO errors and leave recovery to the caller.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when missing/unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Removes the value stored under `key`; removing an absent key is fine
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// File-backed store keeping one JSON file per key
///
/// Files live in an XDG-compliant data directory (`~/.local/share/skycast/`
/// on Linux, or the platform equivalent).
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory where the per-key files are stored
    dir: PathBuf,
}

impl FileStore {
    /// Creates a FileStore in the XDG data directory
    ///
    /// Returns `None` if the platform directory cannot be determined (e.g.
    /// no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skycast")?;
        Some(Self {
            dir: project_dirs.data_dir().to_path_buf(),
        })
    }

    /// Creates a FileStore rooted at a custom directory
    ///
    /// Useful for testing or when a specific location is needed.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the path of the file backing the given key
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store: a test double, and the session-only fallback when no
/// platform data directory can be determined
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = FileStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_file_store_set_then_get() {
        let (mut store, _temp_dir) = create_test_store();

        store.set("greeting", "hello").expect("set should succeed");

        assert_eq!(store.get("greeting").as_deref(), Some("hello"));
    }

    #[test]
    fn test_file_store_get_missing_key_is_none() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_file_store_set_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("deeply").join("nested");
        let mut store = FileStore::with_dir(nested.clone());

        store.set("key", "value").expect("set should succeed");

        assert!(nested.join("key.json").exists());
    }

    #[test]
    fn test_file_store_overwrites_existing_value() {
        let (mut store, _temp_dir) = create_test_store();

        store.set("key", "first").expect("set should succeed");
        store.set("key", "second").expect("set should succeed");

        assert_eq!(store.get("key").as_deref(), Some("second"));
    }

    #[test]
    fn test_file_store_remove_deletes_file() {
        let (mut store, temp_dir) = create_test_store();

        store.set("key", "value").expect("set should succeed");
        store.remove("key").expect("remove should succeed");

        assert!(store.get("key").is_none());
        assert!(!temp_dir.path().join("key.json").exists());
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() {
        let (mut store, _temp_dir) = create_test_store();
        assert!(store.remove("never_set").is_ok());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();

        store.set("key", "value").expect("set should succeed");
        assert_eq!(store.get("key").as_deref(), Some("value"));

        store.remove("key").expect("remove should succeed");
        assert!(store.get("key").is_none());
    }

    #[test]
    fn test_memory_store_remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("never_set").is_ok());
    }
}
