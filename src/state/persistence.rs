use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, MemoryStore};
use crate::error::{PersistenceError, PersistenceResult, StorageError};
use crate::file::FileRecord;
use crate::theme::Theme;

/// Everything restored by a load.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedState {
    pub files: Vec<FileRecord>,
    pub theme: Theme,
}

#[derive(Serialize)]
struct SavedBlob<'a> {
    files: &'a [FileRecord],
    theme: Theme,
}

// Missing or null fields fall back to an empty file list and the dark theme
#[derive(Deserialize)]
struct StoredBlob {
    #[serde(default)]
    files: Option<Vec<FileRecord>>,
    #[serde(default)]
    theme: Option<Theme>,
}

impl From<StoredBlob> for PersistedState {
    fn from(blob: StoredBlob) -> Self {
        Self {
            files: blob.files.unwrap_or_default(),
            theme: blob.theme.unwrap_or_default(),
        }
    }
}

/// Serializes the session to a single key of a [`KeyValueStore`].
///
/// Cloning shares the backend, so the write-through subscriber and the
/// explicit load/save actions see the same storage.
#[derive(Clone)]
pub struct PersistenceBridge {
    backend: Arc<Mutex<Box<dyn KeyValueStore>>>,
    key: String,
}

impl std::fmt::Debug for PersistenceBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceBridge")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PersistenceBridge {
    pub fn new(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        let backend: Box<dyn KeyValueStore> = Box::new(backend);
        Self {
            backend: Arc::new(Mutex::new(backend)),
            key: key.into(),
        }
    }

    /// A bridge over a fresh [`MemoryStore`].
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(MemoryStore::new(), key)
    }

    /// Overwrites the stored entry with `files` and `theme`.
    pub fn save(&self, files: &[FileRecord], theme: Theme) -> PersistenceResult<()> {
        let json = serde_json::to_string(&SavedBlob { files, theme })
            .map_err(PersistenceError::Serialization)?;
        self.backend.lock().set(&self.key, &json)?;
        log::debug!("Saved {} files ({} bytes) under {:?}", files.len(), json.len(), self.key);
        Ok(())
    }

    /// Reads the stored entry. `Ok(None)` means nothing was ever saved.
    pub fn load(&self) -> PersistenceResult<Option<PersistedState>> {
        let Some(json) = self.raw()? else {
            return Ok(None);
        };
        let blob: StoredBlob = serde_json::from_str(&json).map_err(PersistenceError::Malformed)?;
        Ok(Some(blob.into()))
    }

    /// The stored JSON, untouched.
    pub fn raw(&self) -> Result<Option<String>, StorageError> {
        self.backend.lock().get(&self.key)
    }

    /// Replaces the stored JSON verbatim.
    pub fn write_raw(&self, json: &str) -> Result<(), StorageError> {
        self.backend.lock().set(&self.key, json)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.lock().remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileId;
    use crate::language::Language;

    #[test]
    fn test_missing_fields_fall_back() {
        let bridge = PersistenceBridge::in_memory("k");
        bridge.write_raw("{}").unwrap();
        let state = bridge.load().unwrap().unwrap();
        assert!(state.files.is_empty());
        assert_eq!(state.theme, Theme::Dark);

        bridge.write_raw(r#"{"files": null, "theme": null}"#).unwrap();
        let state = bridge.load().unwrap().unwrap();
        assert!(state.files.is_empty());
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_wire_format() {
        let bridge = PersistenceBridge::in_memory("k");
        let files = vec![FileRecord {
            id: FileId(1700000000000),
            name: "index.html".to_owned(),
            language: Language::Html,
            content: "<p>Hi</p>".to_owned(),
        }];
        bridge.save(&files, Theme::Solarized).unwrap();

        let value: serde_json::Value = serde_json::from_str(&bridge.raw().unwrap().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "files": [{"id": 1700000000000u64, "name": "index.html", "language": "html", "content": "<p>Hi</p>"}],
                "theme": "solarized"
            })
        );
    }

    #[test]
    fn test_malformed_is_an_error() {
        let bridge = PersistenceBridge::in_memory("k");
        bridge.write_raw("{not json").unwrap();
        assert!(matches!(bridge.load(), Err(PersistenceError::Malformed(_))));
    }
}
