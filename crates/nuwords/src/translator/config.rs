use bon::Builder;

use crate::types::LanguageId;

/// Options for a single translation.
///
/// # Example
///
/// ```
/// use nuwords::TranslationConfig;
///
/// let config = TranslationConfig::default();
/// assert_eq!(config.language().name(), Some("En"));
/// assert!(config.dashed());
///
/// let config = TranslationConfig::builder().language("Fr").dashed(false).build();
/// assert_eq!(config.language().name(), Some("Fr"));
/// assert_eq!(config.separator(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct TranslationConfig {
    /// Dictionary to translate into, `"En"` unless set.
    #[builder(default, into)]
    language: LanguageId,

    /// Whether a hyphen joins a tens word to a trailing ones word
    /// ("twenty-five" rather than "twentyfive").
    #[builder(default = true)]
    dashed: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig::builder().build()
    }
}

impl TranslationConfig {
    /// Default options with a different language.
    pub fn with_language(language: impl Into<LanguageId>) -> Self {
        TranslationConfig::builder().language(language).build()
    }

    pub fn language(&self) -> &LanguageId {
        &self.language
    }

    pub fn dashed(&self) -> bool {
        self.dashed
    }

    /// Text placed between a tens word and a ones word.
    pub fn separator(&self) -> &'static str {
        if self.dashed { "-" } else { "" }
    }
}
