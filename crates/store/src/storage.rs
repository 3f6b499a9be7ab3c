//! Group files on disk

use crate::app_name::AppName;
use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized values of one group, keyed by slot name
pub type GroupData = BTreeMap<String, String>;

/// Directory holding the group files of `app_name`
///
/// `<config_local_dir>/store`, falling back to `./store` on platforms
/// without a home directory.
pub fn storage_dir(app_name: &AppName) -> PathBuf {
    match app_name.config_dir() {
        Some(dir) => dir.join("store"),
        None => {
            tracing::warn!(app = %app_name, "no platform config directory, storing in ./store");
            PathBuf::from("store")
        }
    }
}

/// `<dir>/<group>.json`
pub fn group_path(dir: &Path, group: &str) -> PathBuf {
    dir.join(format!("{group}.json"))
}

/// Load a group from disk
///
/// A missing or empty file is an empty group.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_group(path: &Path) -> Result<GroupData, StoreError> {
    if !path.exists() {
        return Ok(GroupData::new());
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(GroupData::new());
    }

    serde_json::from_str(&contents).map_err(|source| StoreError::MalformedGroup {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a group to disk as pretty-printed JSON
///
/// Creates the storage directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_group(path: &Path, data: &GroupData) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents =
        serde_json::to_string_pretty(data).map_err(|source| StoreError::Serialize {
            key: path.display().to_string(),
            source,
        })?;

    fs::write(path, contents).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a group, apply `modifier`, and save it back if the modifier reports a change
///
/// A malformed group file is replaced rather than blocking every later write.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the result cannot be saved.
pub fn modify_group<F>(path: &Path, modifier: F) -> Result<bool, StoreError>
where
    F: FnOnce(&mut GroupData) -> bool,
{
    let mut data = match load_group(path) {
        Ok(data) => data,
        Err(StoreError::MalformedGroup { path, source }) => {
            tracing::warn!(path = %path.display(), %source, "replacing malformed group file");
            GroupData::new()
        }
        Err(err) => return Err(err),
    };

    let modified = modifier(&mut data);
    if modified {
        save_group(path, &data)?;
    }

    Ok(modified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_files_are_empty_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = group_path(dir.path(), "kantin");
        assert!(load_group(&path).unwrap().is_empty());

        fs::write(&path, "  \n").unwrap();
        assert!(load_group(&path).unwrap().is_empty());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = group_path(&dir.path().join("nested").join("store"), "kantin");
        let mut data = GroupData::new();
        data.insert("a".into(), "1".into());

        save_group(&path, &data).unwrap();
        assert_eq!(load_group(&path).unwrap(), data);
    }

    #[test]
    fn modify_skips_save_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = group_path(dir.path(), "kantin");

        assert!(!modify_group(&path, |_| false).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn modify_replaces_malformed_group() {
        let dir = tempfile::tempdir().unwrap();
        let path = group_path(dir.path(), "kantin");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            load_group(&path),
            Err(StoreError::MalformedGroup { .. })
        ));

        let modified = modify_group(&path, |data| {
            data.insert("k".into(), "\"v\"".into());
            true
        })
        .unwrap();
        assert!(modified);
        assert_eq!(load_group(&path).unwrap().get("k").unwrap(), "\"v\"");
    }
}
