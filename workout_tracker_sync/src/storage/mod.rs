use std::collections::HashMap;

use workout_tracker_lib::{record::{decode_workouts, encode_workouts}, Workout};

use crate::{services::WorkoutStorage, StorageError};

mod file_storage;

pub use file_storage::FileStorage;

/// Storage that lives as long as the value. Used by tests and as a fallback when
/// nothing durable is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(key: &str, blob: &str) -> Self {
        let mut storage = Self::new();
        storage.blobs.insert(key.to_string(), blob.to_string());
        storage
    }
}

impl WorkoutStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Reads the stored collection. Missing or unreadable content counts as no workouts.
pub fn load_workouts(storage: &impl WorkoutStorage, key: &str) -> Vec<Workout> {
    let Some(blob) = storage.get(key) else {
        tracing::debug!("No stored workouts under {key:?}");
        return Vec::new();
    };

    match decode_workouts(&blob) {
        Ok(decoded) => {
            for err in &decoded.skipped {
                tracing::warn!("Skipping stored workout: {err:?}");
            }
            decoded.workouts
        }
        Err(err) => {
            tracing::warn!("Ignoring stored workouts under {key:?}: {err:?}");
            Vec::new()
        }
    }
}

/// Overwrites the stored collection with `workouts`.
pub fn save_workouts<'a>(storage: &mut impl WorkoutStorage, key: &str, workouts: impl IntoIterator<Item = &'a Workout>) -> Result<(), StorageError> {
    let blob = encode_workouts(workouts).map_err(|err| StorageError::Encode(format!("{err:?}")))?;
    storage.set(key, &blob)
}
