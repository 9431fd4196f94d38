//! Dictionary catalog
//!
//! The in-memory model of a loaded language pack: a tree of namespaces and
//! leaf strings, dotted-key resolution, and placeholder interpolation.

pub mod format;
pub mod tree;

pub use format::{interpolate, TranslationParams};
pub use tree::{Dictionary, LookupError, Node};
