//! Resolver-to-view composition

use std::sync::Arc;

use tracing::debug;

use crate::catalog::TranslationParams;
use crate::resolver::{ChangeOutcome, LanguageResolver, LoadOutcome};
use crate::source::DictionarySource;
use crate::view::TranslationView;

/// Couples a shared resolver with one rendered view.
///
/// The binder runs the resolver operation first and then re-applies every
/// binding, so the view always reflects the dictionary that ended up
/// active.
pub struct ViewBinder<S, V> {
    resolver: Arc<LanguageResolver<S>>,
    view: V,
}

impl<S: DictionarySource, V: TranslationView> ViewBinder<S, V> {
    pub fn new(resolver: Arc<LanguageResolver<S>>, view: V) -> Self {
        Self { resolver, view }
    }

    /// Initialize the resolver and translate the view.
    ///
    /// The apply pass runs even when loading failed: with an empty
    /// dictionary every binding receives its raw key, which is the
    /// documented degradation.
    pub async fn initialize(&mut self) -> LoadOutcome {
        let outcome = self.resolver.initialize().await;
        self.apply_translations();
        outcome
    }

    /// Switch languages and, when the switch commits, retranslate the view.
    pub async fn change_language(&mut self, language: &str) -> ChangeOutcome {
        let outcome = self.resolver.change_language(language).await;
        if matches!(outcome, ChangeOutcome::Changed { .. }) {
            self.apply_translations();
        }
        outcome
    }

    /// Resolve every binding in the view and write the text back.
    pub fn apply_translations(&mut self) {
        let empty = TranslationParams::new();
        let bindings = self.view.bindings();
        debug!(count = bindings.len(), "Applying translations to view");

        for binding in bindings {
            let text = self.resolver.translate(&binding.key, &empty);
            self.view.apply(&binding, &text);
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn resolver(&self) -> &Arc<LanguageResolver<S>> {
        &self.resolver
    }
}
