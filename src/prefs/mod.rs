//! Persisted language preference
//!
//! The browser build kept the chosen language in local storage; here it is
//! a single JSON file. Reads are best-effort: a missing or corrupted file
//! simply means no preference.

pub mod store;

pub use store::{PreferenceStore, StoredPreference};
