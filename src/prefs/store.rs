//! File-backed preference storage

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::utils::errors::Result;

/// On-disk shape of the stored preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPreference {
    pub language: String,
    pub updated_at: DateTime<Utc>,
}

/// File-backed store for the active-language preference
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored language code, if any.
    ///
    /// A missing file is no preference; a file that cannot be read or
    /// parsed is logged and likewise treated as no preference.
    pub async fn load(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored language preference");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read language preference");
                return None;
            }
        };

        match serde_json::from_str::<StoredPreference>(&content) {
            Ok(pref) => {
                debug!(language = %pref.language, "Loaded stored language preference");
                Some(pref.language)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored language preference is corrupted, ignoring");
                None
            }
        }
    }

    /// Persist `language` as the active preference.
    pub async fn save(&self, language: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let pref = StoredPreference {
            language: language.to_string(),
            updated_at: Utc::now(),
        };
        let serialized = serde_json::to_string_pretty(&pref)?;
        fs::write(&self.path, serialized).await?;

        debug!(language = language, path = %self.path.display(), "Language preference saved");
        Ok(())
    }
}
