//! JSON file draft store
//!
//! Drafts are kept in `~/.config/sqldraft/drafts.json` as a versioned map
//! of key to SQL text. The file is the only copy: every read loads it, and
//! every write reloads it, changes one key and atomically replaces it, so
//! several handles (or processes) on one file only touch their own keys.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DraftStore, DraftStoreError};

/// On-disk layout of the drafts file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DraftsFile {
    /// Schema version for forward compatibility
    #[serde(default)]
    version: u32,
    #[serde(default)]
    drafts: BTreeMap<String, String>,
}

impl DraftsFile {
    const CURRENT_VERSION: u32 = 1;
}

/// Draft store persisted to a JSON file
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store; a corrupt one is an error so that
    /// existing drafts are never silently overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DraftStoreError> {
        let store = Self { path: path.into() };
        store.load()?;
        Ok(store)
    }

    /// Open the store at the default location in the config directory
    pub fn open_default() -> Result<Self, DraftStoreError> {
        let path = crate::config_paths::drafts_file().ok_or_else(|| {
            DraftStoreError::Unavailable("no config directory available".to_string())
        })?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<DraftsFile, DraftStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No drafts file at {}, starting empty", self.path.display());
                Ok(DraftsFile::default())
            }
            Err(source) => Err(DraftStoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Write `contents` to a sibling temp file, then rename it over the store
    fn save(&self, mut contents: DraftsFile) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| DraftStoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        contents.version = DraftsFile::CURRENT_VERSION;
        let raw = serde_json::to_string_pretty(&contents)?;

        let temp_path = self.temp_path();
        let written = std::fs::File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(raw.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&temp_path, &self.path));
        if let Err(source) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(DraftStoreError::Io {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "drafts.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        Ok(self.load()?.drafts.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        let mut contents = self.load()?;
        contents.drafts.insert(key.to_string(), value.to_string());
        self.save(contents)
    }

    fn remove(&mut self, key: &str) -> Result<(), DraftStoreError> {
        let mut contents = self.load()?;
        if contents.drafts.remove(key).is_none() {
            return Ok(());
        }
        self.save(contents)
    }

    fn keys(&self) -> Result<Vec<String>, DraftStoreError> {
        Ok(self.load()?.drafts.into_keys().collect())
    }
}
