use crate::error::{AssistantError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-file JSON storage for one collection
///
/// The file always holds the complete collection as a pretty-printed JSON
/// array. There are no partial updates.
#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Create the parent directory of the data file if it does not exist yet
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.file_path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| AssistantError::storage(dir, e))?;
        }
        Ok(())
    }

    /// Read every record from the file
    ///
    /// A missing file is not an error and yields an empty collection.
    pub fn load<M: DeserializeOwned>(&self) -> Result<Vec<M>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .map_err(|e| AssistantError::storage(&self.file_path, e))?;
        let records: Vec<M> = serde_json::from_str(&content)
            .map_err(|e| AssistantError::storage(&self.file_path, e))?;
        Ok(records)
    }

    pub fn save<M: Serialize>(&self, records: &[M]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| AssistantError::storage(&self.file_path, e))?;
        fs::write(&self.file_path, content)
            .map_err(|e| AssistantError::storage(&self.file_path, e))?;
        Ok(())
    }

    /// Delete the data file if present
    pub fn remove(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .map_err(|e| AssistantError::storage(&self.file_path, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("missing.json"));
        let records: Vec<String> = storage.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("tasks.json");
        let storage = Storage::new(&path);

        storage
            .save(&["read chapter 3".to_string(), "flashcards".to_string()])
            .unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        // pretty printed: one element per line
        assert!(content.contains("\n  \"read chapter 3\""));

        let records: Vec<String> = storage.load().unwrap();
        assert_eq!(records, vec!["read chapter 3", "flashcards"]);
    }

    #[test]
    fn test_load_malformed_json_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let err = Storage::new(&path).load::<String>().unwrap_err();
        assert!(matches!(err, AssistantError::Storage { .. }));
    }

    #[test]
    fn test_remove_is_noop_without_file() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("none.json"));
        assert!(storage.remove().is_ok());
    }
}
