//! Dictionary registry mapping language names to dictionaries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::parser::parse_dictionary;
use crate::translator::error::{LoadError, TranslateError, compute_suggestions};
use crate::types::{Dictionary, ENGLISH, LanguageId};

type Snapshot = Arc<HashMap<String, Arc<Dictionary>>>;

/// A registry of named language dictionaries.
///
/// Lookups read an immutable snapshot of the name table. Registration builds
/// a new snapshot and swaps it in, so a reader sees either the table before
/// or after a registration and never a partially written one.
///
/// # Example
///
/// ```
/// use nuwords::{Dictionary, DictionaryRegistry, LanguageId};
///
/// let registry = DictionaryRegistry::with_builtins();
/// let english = registry.resolve(&LanguageId::from("En")).unwrap();
/// assert_eq!(english.zero(), "zero");
///
/// assert!(registry.resolve(&LanguageId::from("Tlh")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct DictionaryRegistry {
    snapshot: RwLock<Snapshot>,
}

impl DictionaryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry containing the built-in English dictionary as `"En"`.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(ENGLISH, Dictionary::english());
        registry
    }

    /// Register a dictionary under `name`.
    ///
    /// An existing entry with the same name is replaced and returned.
    pub fn register(
        &self,
        name: impl Into<String>,
        dictionary: impl Into<Arc<Dictionary>>,
    ) -> Option<Arc<Dictionary>> {
        let name = name.into();
        let mut current = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = HashMap::clone(&current);
        let previous = next.insert(name.clone(), dictionary.into());
        *current = Arc::new(next);
        debug!(language = %name, replaced = previous.is_some(), "registered dictionary");
        previous
    }

    /// Look up a dictionary by name.
    pub fn get(&self, name: &str) -> Option<Arc<Dictionary>> {
        self.snapshot().get(name).cloned()
    }

    /// Check if a dictionary is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.snapshot().contains_key(name)
    }

    /// Resolve a language identifier to a dictionary.
    ///
    /// Dictionary handles are returned unchanged. Names that are not
    /// registered fail with [`TranslateError::UnsupportedLanguage`]; there is
    /// no fallback to another language.
    pub fn resolve(&self, language: &LanguageId) -> Result<Arc<Dictionary>, TranslateError> {
        match language {
            LanguageId::Dictionary(dictionary) => Ok(Arc::clone(dictionary)),
            LanguageId::Name(name) => self.get(name).ok_or_else(|| {
                TranslateError::UnsupportedLanguage {
                    name: name.clone(),
                    suggestions: compute_suggestions(name, &self.languages()),
                }
            }),
        }
    }

    /// Registered language names in sorted order.
    pub fn languages(&self) -> Vec<String> {
        let mut names: Vec<String> = self.snapshot().keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse dictionary source and register it under `name`.
    pub fn load_str(
        &self,
        name: impl Into<String>,
        source: &str,
    ) -> Result<Arc<Dictionary>, LoadError> {
        let dictionary = Arc::new(parse_dictionary(source)?);
        self.register(name, Arc::clone(&dictionary));
        Ok(dictionary)
    }

    /// Read a dictionary file and register it under `name`.
    pub fn load_file(
        &self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Arc<Dictionary>, LoadError> {
        let path = path.as_ref();
        let dictionary = Arc::new(load_dictionary(path)?);
        debug!(path = %path.display(), "loaded dictionary file");
        self.register(name, Arc::clone(&dictionary));
        Ok(dictionary)
    }

    fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Read and parse a dictionary file without registering it.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(&content).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}
