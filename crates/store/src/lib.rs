//! Local key-value store for the canteen dashboard
//!
//! A [`LocalStore`] is a directory plus a group name. The group is a single
//! JSON file mapping each slot key to the JSON serialization of its value.
//!
//! Two families of operations are provided:
//!
//! - [`LocalStore::read`] and [`LocalStore::write`] are best-effort. They never
//!   fail the caller: a missing or malformed slot reads as the supplied
//!   default, and a failed write is logged while the caller keeps its
//!   in-memory state.
//! - [`LocalStore::load`], [`LocalStore::save`], [`LocalStore::remove`],
//!   [`LocalStore::contains`] and [`LocalStore::keys`] return
//!   [`StoreError`] for callers that need to observe failures.
//!
//! # Example
//!
//! ```no_run
//! use kantin_store::{AppName, LocalStore};
//!
//! let store = LocalStore::new(&AppName::new("id.sch", "smktelkom", "kantin"));
//! store.write("greeting", &"halo");
//! let greeting: String = store.read("greeting", String::new());
//! assert_eq!(greeting, "halo");
//! ```

mod app_name;
mod error;
mod storage;

pub use app_name::AppName;
pub use error::StoreError;
pub use storage::{GroupData, group_path, storage_dir};

use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use storage::{load_group, modify_group};

/// Group used when none is given
pub const DEFAULT_GROUP: &str = "kantin";

/// Handle to one group file of slots
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStore {
    dir: PathBuf,
    group: String,
}

impl LocalStore {
    /// Open the default group under the platform storage directory for `app_name`
    pub fn new(app_name: &AppName) -> Self {
        Self::at(storage_dir(app_name))
    }

    /// Open the default group under an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            group: DEFAULT_GROUP.to_string(),
        }
    }

    /// Use a different group file in the same directory
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Path of the backing group file
    pub fn path(&self) -> PathBuf {
        group_path(&self.dir, &self.group)
    }

    /// Read a slot, falling back to `default` when it is absent or malformed
    ///
    /// Failures are logged and never reach the caller.
    pub fn read<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, group = %self.group, "slot absent, using default");
                default
            }
            Err(err) => {
                tracing::warn!(
                    key,
                    group = %self.group,
                    error = %err,
                    "unreadable slot, using default"
                );
                default
            }
        }
    }

    /// Write a slot, logging instead of failing when storage is unavailable
    ///
    /// Returns whether the value reached disk.
    pub fn write<T>(&self, key: &str, value: &T) -> bool
    where
        T: Serialize + ?Sized,
    {
        match self.save(key, value) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key, group = %self.group, error = %err, "failed to persist slot");
                false
            }
        }
    }

    /// Load a slot
    ///
    /// Returns `Ok(None)` if the key is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be read or the stored value
    /// does not deserialize into `T`.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let data = load_group(&self.path())?;

        let Some(value) = data.get(key) else {
            return Ok(None);
        };

        serde_json::from_str(value)
            .map(Some)
            .map_err(|source| StoreError::MalformedValue {
                key: key.to_string(),
                source,
            })
    }

    /// Save a slot, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or the group file
    /// cannot be written.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        modify_group(&self.path(), |data| {
            data.insert(key.to_string(), json);
            true
        })?;

        Ok(())
    }

    /// Delete a slot
    ///
    /// Returns `Ok(true)` if the slot existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be loaded or saved.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        modify_group(&self.path(), |data| data.remove(key).is_some())
    }

    /// Check whether a slot exists
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be loaded.
    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(load_group(&self.path())?.contains_key(key))
    }

    /// List all slot keys in the group, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be loaded.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(load_group(&self.path())?.into_keys().collect())
    }
}
