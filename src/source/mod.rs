//! Dictionary sources
//!
//! Where language packs come from: a remote resource root over HTTP, or a
//! local directory of JSON files. Both hand back a parsed [`Dictionary`];
//! any network, I/O, or parse problem is a load failure for the resolver
//! to absorb.

pub mod dir;
pub mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use crate::catalog::Dictionary;
use crate::utils::errors::{LocaleError, Result};

/// A provider of per-language dictionaries.
///
/// `fetch` suspends at the transport and at the parse, nothing else in the
/// crate does.
#[allow(async_fn_in_trait)]
pub trait DictionarySource: Send + Sync {
    /// Fetch and parse the dictionary for `language`.
    async fn fetch(&self, language: &str) -> Result<Dictionary>;
}

/// Reject language codes that could not name a resource file.
pub(crate) fn check_language_code(code: &str) -> Result<()> {
    let well_formed = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(LocaleError::InvalidInput(format!(
            "invalid language code: {code:?}"
        )))
    }
}
