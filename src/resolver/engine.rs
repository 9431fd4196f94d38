//! Resolver engine
//!
//! State is a single snapshot (language + dictionary + generation) behind an
//! `RwLock`, replaced wholesale on commit so readers never observe a
//! partially loaded dictionary. Lookups are synchronous; only loading
//! suspends, at the fetch and nowhere else.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::catalog::{interpolate, Dictionary, LookupError, TranslationParams};
use crate::prefs::PreferenceStore;
use crate::resolver::events::LanguageChanged;
use crate::source::DictionarySource;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Result of a [`LanguageResolver::load`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A dictionary was committed; `language` is the code activated, which
    /// is the fallback code when fallback recovery kicked in
    Loaded { language: String },
    /// A newer load committed first; this result was discarded
    Superseded,
    /// The requested language and the fallback both failed; prior state is
    /// untouched
    Failed,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Result of a [`LanguageResolver::change_language`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The requested language was already active; no fetch, no event
    Unchanged,
    /// The switch committed and a [`LanguageChanged`] event was broadcast
    Changed { language: String },
    /// A newer load committed first; this switch was discarded
    Superseded,
    /// Neither the requested language nor the fallback could be loaded
    Failed,
}

struct ActiveState {
    language: String,
    dictionary: Dictionary,
    generation: u64,
}

/// The translation resolver.
///
/// Constructed once at startup and shared as `Arc<LanguageResolver<_>>` by
/// everything that needs translation.
pub struct LanguageResolver<S> {
    source: S,
    prefs: PreferenceStore,
    fallback_language: String,
    state: RwLock<ActiveState>,
    generation: AtomicU64,
    events: broadcast::Sender<LanguageChanged>,
}

impl<S: DictionarySource> LanguageResolver<S> {
    /// Create a resolver with an empty dictionary.
    ///
    /// Until the first successful load every lookup misses and comes back
    /// as the raw key; the fallback code stands in as the active language.
    pub fn new(source: S, prefs: PreferenceStore, fallback_language: impl Into<String>) -> Self {
        let fallback_language = fallback_language.into();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            source,
            prefs,
            state: RwLock::new(ActiveState {
                language: fallback_language.clone(),
                dictionary: Dictionary::empty(),
                generation: 0,
            }),
            fallback_language,
            generation: AtomicU64::new(0),
            events,
        }
    }

    /// Load the persisted preferred language, or the fallback when none is
    /// stored.
    pub async fn initialize(&self) -> LoadOutcome {
        let preferred = match self.prefs.load().await {
            Some(language) => language,
            None => self.fallback_language.clone(),
        };
        info!(language = %preferred, "Initializing language resolver");

        let outcome = self.load(&preferred).await;
        if outcome == LoadOutcome::Failed {
            error!(
                language = %preferred,
                "No language resource could be loaded, lookups will return raw keys"
            );
        }
        outcome
    }

    /// Fetch and activate the dictionary for `language`.
    ///
    /// On fetch failure the fixed fallback language is retried exactly
    /// once. Failures never propagate; the outcome enum is the only
    /// failure surface.
    pub async fn load(&self, language: &str) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut attempt = language.to_string();
        loop {
            match self.source.fetch(&attempt).await {
                Ok(dictionary) => return self.commit(attempt, dictionary, generation).await,
                Err(e) => {
                    warn!(
                        language = %attempt,
                        severity = %e.severity(),
                        error = %e,
                        "Failed to load language resource"
                    );
                    if attempt == self.fallback_language {
                        return LoadOutcome::Failed;
                    }
                    info!(fallback = %self.fallback_language, "Falling back");
                    attempt = self.fallback_language.clone();
                }
            }
        }
    }

    async fn commit(&self, language: String, dictionary: Dictionary, generation: u64) -> LoadOutcome {
        {
            let mut state = self.state_write();
            if generation <= state.generation {
                debug!(
                    language = %language,
                    generation = generation,
                    committed = state.generation,
                    "Discarding stale language load"
                );
                return LoadOutcome::Superseded;
            }
            *state = ActiveState {
                language: language.clone(),
                dictionary,
                generation,
            };
        }

        info!(language = %language, "Language loaded");
        if let Err(e) = self.prefs.save(&language).await {
            warn!(language = %language, error = %e, "Failed to persist language preference");
        }
        LoadOutcome::Loaded { language }
    }

    /// Switch to `language`.
    ///
    /// A no-op when the code is already active. On a committed switch a
    /// [`LanguageChanged`] event is broadcast carrying the code actually
    /// activated.
    pub async fn change_language(&self, language: &str) -> ChangeOutcome {
        if self.state_read().language == language {
            debug!(language = language, "Language already active");
            return ChangeOutcome::Unchanged;
        }

        match self.load(language).await {
            LoadOutcome::Loaded { language } => {
                let _ = self.events.send(LanguageChanged {
                    language: language.clone(),
                });
                ChangeOutcome::Changed { language }
            }
            LoadOutcome::Superseded => ChangeOutcome::Superseded,
            LoadOutcome::Failed => ChangeOutcome::Failed,
        }
    }

    /// Resolve a dot-separated key, interpolating `params` into the leaf.
    ///
    /// Never fails: a key that cannot be resolved to text is logged once
    /// and returned verbatim, so the UI shows the key path rather than
    /// nothing.
    pub fn translate(&self, key: &str, params: &TranslationParams) -> String {
        let state = self.state_read();
        match state.dictionary.resolve(key) {
            Ok(text) => interpolate(text, params),
            Err(e @ LookupError::NotALeaf { .. }) => {
                warn!(key = key, error = %e, "Translation key does not resolve to text");
                key.to_string()
            }
            Err(e) => {
                warn!(key = key, error = %e, "Translation key not found");
                key.to_string()
            }
        }
    }

    /// Typed lookup for callers that want misses loudly instead of the
    /// raw-key degradation.
    pub fn lookup(&self, key: &str) -> Result<String, LookupError> {
        self.state_read()
            .dictionary
            .resolve(key)
            .map(|text| text.to_string())
    }

    /// Shortcut for keys under the `messages.` namespace.
    pub fn message(&self, key: &str, params: &TranslationParams) -> String {
        self.translate(&format!("messages.{key}"), params)
    }

    /// Shortcut for keys under the `api_errors.` namespace.
    pub fn api_error(&self, key: &str, params: &TranslationParams) -> String {
        self.translate(&format!("api_errors.{key}"), params)
    }

    /// The currently active language code.
    pub fn current_language(&self) -> String {
        self.state_read().language.clone()
    }

    /// The fixed fallback language code.
    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// Number of leaf translations in the active dictionary.
    pub fn key_count(&self) -> usize {
        self.state_read().dictionary.key_count()
    }

    /// Subscribe to language change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<LanguageChanged> {
        self.events.subscribe()
    }

    fn state_read(&self) -> RwLockReadGuard<'_, ActiveState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn state_write(&self) -> RwLockWriteGuard<'_, ActiveState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use crate::utils::errors::{LocaleError, Result as LocaleResult};

    /// In-memory source with per-language latency and a fetch counter.
    struct MapSource {
        packs: HashMap<String, String>,
        delays: HashMap<String, Duration>,
        calls: AtomicUsize,
    }

    impl MapSource {
        fn new(packs: &[(&str, &str)]) -> Self {
            Self {
                packs: packs
                    .iter()
                    .map(|(lang, json)| (lang.to_string(), json.to_string()))
                    .collect(),
                delays: HashMap::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delay(mut self, language: &str, delay: Duration) -> Self {
            self.delays.insert(language.to_string(), delay);
            self
        }

        fn fetch_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DictionarySource for MapSource {
        async fn fetch(&self, language: &str) -> LocaleResult<Dictionary> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(language) {
                tokio::time::sleep(*delay).await;
            }
            match self.packs.get(language) {
                Some(json) => Ok(serde_json::from_str(json)?),
                None => Err(LocaleError::ResourceNotFound {
                    resource: format!("{language}.json"),
                }),
            }
        }
    }

    const EN_PACK: &str = r#"{
        "header": { "title": "My Podcasts" },
        "messages": { "podcast_added": "Added {naslov}!" },
        "settings": { "english": "English", "slovenian": "Slovenian" }
    }"#;

    const SL_PACK: &str = r#"{
        "header": { "title": "Moji podkasti" },
        "messages": { "podcast_added": "Dodano: {naslov}!" },
        "settings": { "english": "Angleščina", "slovenian": "Slovenščina" }
    }"#;

    fn resolver_with(
        packs: &[(&str, &str)],
    ) -> (LanguageResolver<MapSource>, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PreferenceStore::new(dir.path().join("language.json"));
        let resolver = LanguageResolver::new(MapSource::new(packs), prefs, "en");
        (resolver, dir)
    }

    fn params(entries: &[(&str, &str)]) -> TranslationParams {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_load_and_translate_round_trip() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);

        assert_eq!(
            resolver.load("en").await,
            LoadOutcome::Loaded {
                language: "en".to_string()
            }
        );
        assert_eq!(resolver.current_language(), "en");
        assert_eq!(
            resolver.translate("header.title", &TranslationParams::new()),
            "My Podcasts"
        );
    }

    #[tokio::test]
    async fn test_translate_interpolates_params() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);
        resolver.load("en").await;

        assert_eq!(
            resolver.translate("messages.podcast_added", &params(&[("naslov", "TechTalk")])),
            "Added TechTalk!"
        );
    }

    #[tokio::test]
    async fn test_missing_key_returns_key() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);
        resolver.load("en").await;

        assert_eq!(
            resolver.translate("no.such.key", &TranslationParams::new()),
            "no.such.key"
        );
    }

    #[tokio::test]
    async fn test_namespace_key_degrades_to_key() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);
        resolver.load("en").await;

        assert_eq!(resolver.translate("header", &TranslationParams::new()), "header");
        assert!(matches!(
            resolver.lookup("header"),
            Err(LookupError::NotALeaf { .. })
        ));
    }

    #[tokio::test]
    async fn test_translate_before_any_load_returns_raw_keys() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);

        assert_eq!(
            resolver.translate("header.title", &TranslationParams::new()),
            "header.title"
        );
        assert_eq!(resolver.key_count(), 0);
    }

    #[tokio::test]
    async fn test_load_falls_back_once() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);

        let outcome = resolver.load("xx").await;
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                language: "en".to_string()
            }
        );
        assert_eq!(resolver.current_language(), "en");
        assert_eq!(resolver.source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_double_failure_leaves_state_untouched() {
        let (resolver, _dir) = resolver_with(&[("sl", SL_PACK)]);

        assert_eq!(
            resolver.load("sl").await,
            LoadOutcome::Loaded {
                language: "sl".to_string()
            }
        );

        // Both the requested language and the fallback are unavailable.
        assert_eq!(resolver.load("xx").await, LoadOutcome::Failed);
        assert_eq!(resolver.current_language(), "sl");
        assert_eq!(
            resolver.translate("header.title", &TranslationParams::new()),
            "Moji podkasti"
        );
    }

    #[tokio::test]
    async fn test_initialize_uses_stored_preference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PreferenceStore::new(dir.path().join("language.json"));
        prefs.save("sl").await.expect("preference saves");

        let resolver = LanguageResolver::new(
            MapSource::new(&[("en", EN_PACK), ("sl", SL_PACK)]),
            prefs,
            "en",
        );

        assert!(resolver.initialize().await.is_loaded());
        assert_eq!(resolver.current_language(), "sl");
    }

    #[tokio::test]
    async fn test_initialize_without_preference_loads_fallback() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);

        assert!(resolver.initialize().await.is_loaded());
        assert_eq!(resolver.current_language(), "en");
    }

    #[tokio::test]
    async fn test_successful_load_persists_preference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pref_path = dir.path().join("language.json");
        let resolver = LanguageResolver::new(
            MapSource::new(&[("en", EN_PACK), ("sl", SL_PACK)]),
            PreferenceStore::new(&pref_path),
            "en",
        );

        resolver.load("sl").await;
        assert_eq!(
            PreferenceStore::new(&pref_path).load().await,
            Some("sl".to_string())
        );
    }

    #[tokio::test]
    async fn test_change_language_emits_event() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK), ("sl", SL_PACK)]);
        resolver.load("en").await;

        let mut events = resolver.subscribe();
        let outcome = resolver.change_language("sl").await;

        assert_eq!(
            outcome,
            ChangeOutcome::Changed {
                language: "sl".to_string()
            }
        );
        let event = events.try_recv().expect("change event broadcast");
        assert_eq!(
            event,
            LanguageChanged {
                language: "sl".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_change_language_same_code_is_noop() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK)]);
        resolver.load("en").await;
        let fetches_before = resolver.source.fetch_count();

        let mut events = resolver.subscribe();
        assert_eq!(resolver.change_language("en").await, ChangeOutcome::Unchanged);

        assert_eq!(resolver.source.fetch_count(), fetches_before);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_change_language_event_carries_activated_code() {
        let (resolver, _dir) = resolver_with(&[("en", EN_PACK), ("sl", SL_PACK)]);
        resolver.load("sl").await;

        // "xx" is unavailable, recovery lands on the fallback.
        let mut events = resolver.subscribe();
        let outcome = resolver.change_language("xx").await;

        assert_eq!(
            outcome,
            ChangeOutcome::Changed {
                language: "en".to_string()
            }
        );
        let event = events.try_recv().expect("change event broadcast");
        assert_eq!(
            event,
            LanguageChanged {
                language: "en".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PreferenceStore::new(dir.path().join("language.json"));
        let source = MapSource::new(&[("en", EN_PACK), ("sl", SL_PACK)])
            .with_delay("en", Duration::from_millis(50));
        let resolver = LanguageResolver::new(source, prefs, "en");

        // The slow load starts first; the fast one starts later and must win.
        let (slow, fast) = tokio::join!(resolver.load("en"), resolver.load("sl"));

        assert_eq!(slow, LoadOutcome::Superseded);
        assert_eq!(
            fast,
            LoadOutcome::Loaded {
                language: "sl".to_string()
            }
        );
        assert_eq!(resolver.current_language(), "sl");
        assert_eq!(
            resolver.translate("header.title", &TranslationParams::new()),
            "Moji podkasti"
        );
    }

    #[tokio::test]
    async fn test_message_and_api_error_helpers_prefix_namespaces() {
        let (resolver, _dir) = resolver_with(&[(
            "en",
            r#"{
                "messages": { "podcast_deleted": "Podcast deleted" },
                "api_errors": { "network_error": "Network error: {error}" }
            }"#,
        )]);
        resolver.load("en").await;

        assert_eq!(
            resolver.message("podcast_deleted", &TranslationParams::new()),
            "Podcast deleted"
        );
        assert_eq!(
            resolver.api_error("network_error", &params(&[("error", "timeout")])),
            "Network error: timeout"
        );
    }
}
