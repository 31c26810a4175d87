//! Process-wide dictionary registry.
//!
//! The global registry is created on first use with the built-in English
//! dictionary registered as `"En"`. [`Translator::new`](crate::Translator::new)
//! and the [`InWords`](crate::InWords) methods resolve language names here.

use std::sync::{Arc, LazyLock};

use crate::translator::{DictionaryRegistry, TranslateError};
use crate::types::{Dictionary, LanguageId};

static GLOBAL_REGISTRY: LazyLock<DictionaryRegistry> =
    LazyLock::new(DictionaryRegistry::with_builtins);

/// The global registry.
pub fn registry() -> &'static DictionaryRegistry {
    &GLOBAL_REGISTRY
}

/// Register a dictionary in the global registry, replacing any existing
/// entry with the same name.
pub fn register(
    name: impl Into<String>,
    dictionary: impl Into<Arc<Dictionary>>,
) -> Option<Arc<Dictionary>> {
    GLOBAL_REGISTRY.register(name, dictionary)
}

/// Resolve a language identifier against the global registry.
pub fn resolve(language: &LanguageId) -> Result<Arc<Dictionary>, TranslateError> {
    GLOBAL_REGISTRY.resolve(language)
}

/// Language names registered in the global registry, sorted.
pub fn languages() -> Vec<String> {
    GLOBAL_REGISTRY.languages()
}
