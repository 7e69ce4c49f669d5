//! The fingerprint cache.
//!
//! Formatting is idempotent, so a file whose current fingerprint matches
//! what the last run recorded cannot change again and can be skipped
//! without tokenizing it. The cache is a flat JSON map from absolute file
//! path to fingerprint, shared between the parallel format workers behind a
//! mutex.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;

/// Persistent map from file path to the fingerprint of its last formatted
/// contents.
pub struct FingerprintCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, u64>>,
}

impl FingerprintCache {
    /// Opens the cache at `path`, starting empty if the file is missing or
    /// unreadable (a stale or corrupt cache only costs reformatting).
    pub fn open(path: PathBuf) -> Self {
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// The default cache location under the user cache directory.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::cache_dir()?.join("swfmt").join("fingerprints.json"))
    }

    /// True if `file` was last formatted to contents with this fingerprint.
    pub fn matches(&self, file: &Path, fingerprint: u64) -> bool {
        self.entries
            .lock()
            .get(&file.display().to_string())
            .is_some_and(|&recorded| recorded == fingerprint)
    }

    /// Records the fingerprint of `file`'s formatted contents.
    pub fn record(&self, file: &Path, fingerprint: u64) {
        self.entries
            .lock()
            .insert(file.display().to_string(), fingerprint);
    }

    /// Writes the cache back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let entries = self.entries.lock();
        let text = serde_json::to_string(&*entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
