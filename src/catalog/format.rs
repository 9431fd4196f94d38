//! Placeholder interpolation
//!
//! Translation leaves may contain `{name}` tokens which are substituted
//! from a caller-supplied parameter map. Tokens with no matching entry are
//! left verbatim so a missing parameter stays visible instead of producing
//! a blank.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Replace every `{name}` token in `template` with its entry in `params`.
///
/// An empty parameter map returns the template unchanged.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
