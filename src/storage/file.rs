//! File-backed storage slot.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::StorageSlot;
use crate::error::Result;

/// Storage slot backed by one JSON file per key under a root directory.
pub struct FileSlot {
    /// Root directory for slot files.
    root: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discover the default slot root (`~/.flowstash`).
    ///
    /// Returns `None` when no home directory is available, e.g. in a
    /// stripped-down container. Callers treat that as "no persistent
    /// storage", not as an error.
    pub fn discover() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(".flowstash")))
    }

    /// Get the slot root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Ensure the root directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create store directory {:?}", self.root))?;
        Ok(())
    }
}

impl StorageSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        Ok(Some(content))
    }

    /// Write using the write-to-temp-then-rename pattern so the slot file is
    /// never left partially written if the process dies mid-write.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {:?}", path))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("Failed to remove {:?}", path))?;
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_key_returns_none() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        assert!(slot.read("flows").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        slot.write("flows", "{\"a\":1}").unwrap();

        assert_eq!(slot.read("flows").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn write_replaces_previous_value() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        slot.write("flows", "first").unwrap();
        slot.write("flows", "second").unwrap();

        assert_eq!(slot.read("flows").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn write_creates_root_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("store");
        let slot = FileSlot::new(&root);

        slot.write("flows", "{}").unwrap();

        assert!(root.join("flows.json").exists());
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        slot.write("flows", "{}").unwrap();

        let temp_path = slot.root().join("flows.json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful write"
        );
    }

    #[test]
    fn remove_deletes_key_file() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        slot.write("flows", "{}").unwrap();
        slot.remove("flows").unwrap();

        assert!(slot.read("flows").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        slot.remove("flows").unwrap();
        slot.remove("flows").unwrap();
    }

    #[test]
    fn discover_roots_under_home() {
        if let Some(slot) = FileSlot::discover() {
            assert!(slot.location().ends_with(".flowstash"));
        }
    }

    #[test]
    fn location_shows_root() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("store"));

        assert!(slot.location().contains("store"));
    }
}
