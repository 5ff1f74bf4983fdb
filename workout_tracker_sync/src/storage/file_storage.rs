use std::{io::ErrorKind, path::PathBuf};

use crate::{config::STORAGE_DIR, services::WorkoutStorage, StorageError};

/// Keeps each key in its own `<key>.json` file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .map_err(|_| StorageError::Write(format!("Failed to create storage directory: {:?}", dir)))?;
        }

        Ok(FileStorage { dir })
    }

    /// Storage under the project's data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let root = project_root::get_project_root()
            .map_err(|_| StorageError::Write("Failed to locate project root".to_string()))?;
        Self::open(root.join(STORAGE_DIR))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl WorkoutStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(blob) => Some(blob),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!("Failed to read {:?}: {err}", path);
                None
            }
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        std::fs::write(&tmp, blob)
            .map_err(|_| StorageError::Write(format!("Failed to write {:?}", tmp)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|_| StorageError::Write(format!("Failed to replace {:?}", path)))
    }
}
