//! Translation resolver
//!
//! Owns the active language and the loaded dictionary, performs
//! lookup-with-interpolation, switches languages with single-retry fallback
//! recovery, and broadcasts a notification after every successful switch.

pub mod engine;
pub mod events;

pub use engine::{ChangeOutcome, LanguageResolver, LoadOutcome};
pub use events::LanguageChanged;
