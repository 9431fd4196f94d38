//! podlocale translation pack checker
//!
//! Loads every configured language pack from disk, takes the fallback pack
//! as the reference key set, and reports keys that other packs are missing
//! or carry in excess. Exits non-zero when any pack fails to load or lacks
//! keys, so the check can gate a release.

use std::collections::BTreeSet;

use anyhow::Context;
use tracing::{error, info, warn};

use podlocale::{
    config::Settings,
    source::{DictionarySource, DirSource},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    let _guard = logging::init_logging(&settings.logging).context("failed to initialize logging")?;

    info!(
        dir = %settings.resources.dir,
        fallback = %settings.locale.fallback_language,
        "Checking translation packs"
    );

    let source = DirSource::new(&settings.resources.dir);
    let fallback = &settings.locale.fallback_language;

    // The fallback pack is the contract every other pack is measured
    // against; without it the checker has nothing to compare to.
    let reference = source
        .fetch(fallback)
        .await
        .with_context(|| format!("fallback pack '{fallback}' failed to load"))?;
    let reference_keys: BTreeSet<String> = reference.leaf_keys().into_iter().collect();
    info!(
        language = %fallback,
        keys = reference_keys.len(),
        "Reference pack loaded"
    );

    let mut broken = 0usize;
    for language in &settings.locale.supported_languages {
        if language == fallback {
            continue;
        }

        let dictionary = match source.fetch(language).await {
            Ok(dictionary) => dictionary,
            Err(e) => {
                error!(
                    language = %language,
                    severity = %e.severity(),
                    error = %e,
                    "Language pack failed to load"
                );
                broken += 1;
                continue;
            }
        };

        let keys: BTreeSet<String> = dictionary.leaf_keys().into_iter().collect();
        let missing: Vec<&String> = reference_keys.difference(&keys).collect();
        let extra: Vec<&String> = keys.difference(&reference_keys).collect();

        for key in &missing {
            warn!(language = %language, key = %key, "Missing translation key");
        }
        for key in &extra {
            warn!(language = %language, key = %key, "Key absent from fallback pack");
        }

        if missing.is_empty() {
            info!(
                language = %language,
                keys = keys.len(),
                extra = extra.len(),
                "Language pack complete"
            );
        } else {
            error!(
                language = %language,
                missing = missing.len(),
                "Language pack incomplete"
            );
            broken += 1;
        }
    }

    if broken > 0 {
        anyhow::bail!("{broken} language pack(s) failed the check");
    }

    info!("All language packs check out");
    Ok(())
}
