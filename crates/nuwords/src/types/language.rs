use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use super::Dictionary;

/// Name of the built-in English dictionary.
pub const ENGLISH: &str = "En";

/// Identifies the dictionary a translation should use.
///
/// A `Name` is looked up in a [`DictionaryRegistry`](crate::DictionaryRegistry);
/// a `Dictionary` handle is used as-is and bypasses lookup.
///
/// # Example
///
/// ```
/// use nuwords::{Dictionary, LanguageId};
///
/// let by_name: LanguageId = "En".into();
/// assert_eq!(by_name.name(), Some("En"));
///
/// let direct: LanguageId = Dictionary::english().into();
/// assert_eq!(direct.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageId {
    /// A registered language name such as `"En"`.
    Name(String),

    /// A dictionary supplied directly by the caller.
    Dictionary(Arc<Dictionary>),
}

impl LanguageId {
    /// The language name, if this identifier is a name.
    pub fn name(&self) -> Option<&str> {
        match self {
            LanguageId::Name(name) => Some(name),
            LanguageId::Dictionary(_) => None,
        }
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        LanguageId::Name(ENGLISH.to_owned())
    }
}

impl Display for LanguageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LanguageId::Name(name) => f.write_str(name),
            LanguageId::Dictionary(_) => f.write_str("<custom dictionary>"),
        }
    }
}

impl From<&str> for LanguageId {
    fn from(name: &str) -> Self {
        LanguageId::Name(name.to_owned())
    }
}

impl From<String> for LanguageId {
    fn from(name: String) -> Self {
        LanguageId::Name(name)
    }
}

impl From<Dictionary> for LanguageId {
    fn from(dictionary: Dictionary) -> Self {
        LanguageId::Dictionary(Arc::new(dictionary))
    }
}

impl From<Arc<Dictionary>> for LanguageId {
    fn from(dictionary: Arc<Dictionary>) -> Self {
        LanguageId::Dictionary(dictionary)
    }
}
