//! Shared test helpers
//!
//! Language pack fixtures on temp directories and a recording fake view.

use std::collections::HashMap;
use std::path::Path;

use podlocale::view::{Binding, Slot, TranslationView};

pub const EN_PACK: &str = r#"{
    "header": { "title": "My Podcasts" },
    "navigation": { "hide": "Hide" },
    "forms": { "name_placeholder": "Podcast name" },
    "states": { "loading_podcasts": "Loading podcasts..." },
    "messages": { "podcast_added": "Podcast \"{naslov}\" added successfully!" },
    "api_errors": { "network_error": "Network error: {error}" }
}"#;

pub const SL_PACK: &str = r#"{
    "header": { "title": "Moji podkasti" },
    "navigation": { "hide": "Skrij" },
    "forms": { "name_placeholder": "Ime podkasta" },
    "states": { "loading_podcasts": "Nalaganje podkastov ..." },
    "messages": { "podcast_added": "Podkast \"{naslov}\" uspešno dodan!" },
    "api_errors": { "network_error": "Napaka omrežja: {error}" }
}"#;

/// Write a language pack fixture into `dir`.
pub async fn write_pack(dir: &Path, language: &str, json: &str) {
    tokio::fs::write(dir.join(format!("{language}.json")), json)
        .await
        .expect("pack fixture written");
}

/// Fake view: a fixed set of bindings plus a record of what was applied.
pub struct RecordingView {
    bindings: Vec<Binding>,
    applied: HashMap<(Slot, String), String>,
}

impl RecordingView {
    /// Bindings resembling the podcast list page: text content, an input
    /// placeholder, and a tooltip title.
    pub fn podcast_page() -> Self {
        Self {
            bindings: vec![
                Binding::text("header.title"),
                Binding::text("states.loading_podcasts"),
                Binding::placeholder("forms.name_placeholder"),
                Binding::title("navigation.hide"),
            ],
            applied: HashMap::new(),
        }
    }

    /// The text last applied to `binding`, if any.
    pub fn rendered(&self, binding: &Binding) -> Option<&str> {
        self.applied
            .get(&(binding.slot, binding.key.clone()))
            .map(String::as_str)
    }
}

impl TranslationView for RecordingView {
    fn bindings(&self) -> Vec<Binding> {
        self.bindings.clone()
    }

    fn apply(&mut self, binding: &Binding, text: &str) {
        self.applied
            .insert((binding.slot, binding.key.clone()), text.to_string());
    }
}
