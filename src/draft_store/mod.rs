//! Keyed durable string storage for editor drafts
//!
//! A [`DraftStore`] is the origin-scoped key/value persistence the editor
//! syncs its buffer with. Backends:
//!
//! - [`MemoryDraftStore`] - process-scoped, optionally quota-limited
//! - [`FileDraftStore`] - JSON file under the config directory
//!
//! Controllers never talk to a backend directly; they share a
//! [`DraftStoreAdapter`], which turns backend failures into
//! [`DraftStoreError`] values instead of letting them escape.

mod adapter;
mod file;
mod memory;

use std::path::PathBuf;

pub use adapter::DraftStoreAdapter;
pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;

/// Errors surfaced at the draft store boundary
#[derive(Debug, thiserror::Error)]
pub enum DraftStoreError {
    /// Storage is disabled or has no backing location
    #[error("draft storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the store's capacity
    #[error("draft storage quota exceeded writing '{key}' (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },

    #[error("draft file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("draft file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store was re-entered while another operation held it
    #[error("draft storage is busy")]
    Busy,
}

/// Keyed string persistence
///
/// Implementations must treat `remove` of an absent key as success and
/// must store values verbatim.
pub trait DraftStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftStoreError>;

    /// Delete the value under `key`.
    fn remove(&mut self, key: &str) -> Result<(), DraftStoreError>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>, DraftStoreError>;
}
