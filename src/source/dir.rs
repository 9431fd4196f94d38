//! Directory dictionary source
//!
//! Reads language packs from a local directory, one JSON file per language.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::catalog::Dictionary;
use crate::source::{check_language_code, DictionarySource};
use crate::utils::errors::{LocaleError, Result};

/// Dictionary source backed by a directory of `<code>.json` files
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a new DirSource rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DictionarySource for DirSource {
    async fn fetch(&self, language: &str) -> Result<Dictionary> {
        check_language_code(language)?;
        let path = self.dir.join(format!("{language}.json"));
        debug!(language = language, path = %path.display(), "Reading language resource");

        let content = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LocaleError::ResourceNotFound {
                    resource: path.display().to_string(),
                }
            } else {
                LocaleError::Io(e)
            }
        })?;

        let dictionary: Dictionary = serde_json::from_str(&content)?;
        debug!(
            language = language,
            keys = dictionary.key_count(),
            "Language resource parsed"
        );
        Ok(dictionary)
    }
}
