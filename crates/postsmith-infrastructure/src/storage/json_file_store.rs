//! File-backed key/value store.
//!
//! Each key lives in its own `<key>.json` file inside the store directory.
//! Writes go to a temporary file that is synced and then renamed over the
//! target, so a reader never observes a half-written value.

use postsmith_core::error::{PostsmithError, Result};
use postsmith_core::store::KeyValueStore;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;

/// A [`KeyValueStore`] keeping one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

/// Keys become file names; keep them to a safe alphabet.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PostsmithError::config(format!("invalid store key '{key}'")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self.temp_path_for(key);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;
        tracing::debug!("[JsonFileStore] Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postsmith_core::store::StoreExt;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("store"));
        assert!(store.read("settings").unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("store"));

        store.write("settings", r#"{"a":1}"#).unwrap();

        let path = store.path_for("settings").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), r#"{"a":1}"#);
        assert!(!store.temp_path_for("settings").exists());
    }

    #[test]
    fn test_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.set("count", &1u32);
        store.set("count", &2u32);
        assert_eq!(store.get_or("count", 0u32), 2);
    }

    #[test]
    fn test_empty_file_reads_as_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        fs::write(store.path_for("history").unwrap(), "  \n").unwrap();
        assert!(store.read("history").unwrap().is_none());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        assert!(store.write("../escape", "{}").is_err());
        assert!(store.read("").is_err());
    }
}
