//! HTTP dictionary source
//!
//! Fetches language packs from a remote resource root, one JSON document
//! per language at `<base>/<code>.json`.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::catalog::Dictionary;
use crate::source::{check_language_code, DictionarySource};
use crate::utils::errors::{LocaleError, Result};

/// Dictionary source backed by an HTTP resource root
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a new HttpSource for the given resource root.
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("podlocale/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LocaleError::Http)?;

        Ok(Self { client, base_url })
    }

    fn resource_url(&self, language: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                LocaleError::Config(format!(
                    "resource base URL cannot hold a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(&format!("{language}.json"));
        Ok(url)
    }
}

impl DictionarySource for HttpSource {
    async fn fetch(&self, language: &str) -> Result<Dictionary> {
        check_language_code(language)?;
        let url = self.resource_url(language)?;
        debug!(language = language, url = %url, "Fetching language resource");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LocaleError::ResourceStatus {
                resource: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let dictionary: Dictionary = serde_json::from_str(&body)?;
        debug!(
            language = language,
            keys = dictionary.key_count(),
            "Language resource parsed"
        );
        Ok(dictionary)
    }
}
