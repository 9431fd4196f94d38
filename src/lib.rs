//! podlocale
//!
//! Localization engine for the My Podcasts personal podcast manager. This
//! library provides the translation resolver used by the web client: typed
//! dictionary trees loaded per language, dotted-key lookup with placeholder
//! interpolation, single-retry fallback recovery, a persisted language
//! preference, and change notifications for the rest of the UI.

pub mod catalog;
pub mod config;
pub mod prefs;
pub mod resolver;
pub mod source;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LocaleError, Result};

// Re-export main components for easy access
pub use catalog::{Dictionary, LookupError, TranslationParams};
pub use prefs::PreferenceStore;
pub use resolver::{ChangeOutcome, LanguageChanged, LanguageResolver, LoadOutcome};
pub use source::{DictionarySource, DirSource, HttpSource};
pub use view::{Binding, Slot, TranslationView, ViewBinder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
