//! Error type for fallible store operations

use std::path::PathBuf;

/// Failures surfaced by the fallible store primitives
///
/// The best-effort `read`/`write` pair never returns these; it logs them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed group file {}: {source}", .path.display())]
    MalformedGroup {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed value under key '{key}': {source}")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
