//! View binding
//!
//! The rendered page tags elements with translation keys; this module is
//! the seam through which the resolver fills them in. A [`TranslationView`]
//! exposes its tagged slots as [`Binding`]s and receives the resolved text
//! back, keeping the crate free of any particular rendering stack.

pub mod binder;

pub use binder::ViewBinder;

/// Which property of an element receives the translated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Displayed text content (or the value of button-like inputs)
    Text,
    /// Placeholder of an input-like element
    Placeholder,
    /// Tooltip title
    Title,
}

/// A translatable slot in the rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub slot: Slot,
}

impl Binding {
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: Slot::Text,
        }
    }

    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: Slot::Placeholder,
        }
    }

    pub fn title(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: Slot::Title,
        }
    }
}

/// A rendered view whose tagged elements can be translated in place
pub trait TranslationView {
    /// Every translation binding currently present in the view.
    fn bindings(&self) -> Vec<Binding>;

    /// Write resolved text into the element behind `binding`.
    fn apply(&mut self, binding: &Binding, text: &str);
}
