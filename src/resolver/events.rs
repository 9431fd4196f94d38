//! Language change notifications

use serde::{Deserialize, Serialize};

/// Broadcast to subscribers after a language switch commits.
///
/// `language` is the code actually activated, which is the fallback code
/// when fallback recovery kicked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChanged {
    pub language: String,
}
