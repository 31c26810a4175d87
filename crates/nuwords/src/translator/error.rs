//! Error types for translation and dictionary loading.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::translator::MAX;

/// An error that occurred while translating a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The number is negative or larger than [`MAX`].
    #[error("number {number} is not supported, expected a value between 0 and {}", MAX)]
    NumberNotSupported { number: i64 },

    /// No dictionary is registered under the requested name.
    #[error("unsupported language '{name}'{}", did_you_mean(suggestions))]
    UnsupportedLanguage {
        name: String,
        suggestions: Vec<String>,
    },
}

/// Errors that occur while loading a dictionary file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a dictionary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dictionary file failed to parse or validate.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Dictionary source loaded from a string failed to parse or validate.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find registered names close to an unknown one.
///
/// Names of three characters or fewer allow an edit distance of 1, longer
/// names allow 2. Comparison ignores ASCII case, so `"en"` suggests `"En"`.
/// At most three suggestions are returned, closest first.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let wanted = name.to_ascii_lowercase();

    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(&wanted, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn case_only_difference_is_suggested() {
        assert_eq!(compute_suggestions("en", &names(&["En", "Fr"])), vec!["En"]);
    }

    #[test]
    fn distant_names_are_not_suggested() {
        assert!(compute_suggestions("Klingon", &names(&["En", "Fr"])).is_empty());
    }

    #[test]
    fn suggestions_are_limited_and_ordered() {
        let available = names(&["Span", "Spain", "Spani", "Spanis"]);
        let suggestions = compute_suggestions("Spanish", &available);
        assert_eq!(suggestions, vec!["Spanis", "Spani"]);

        let available = names(&["Abc", "Abd", "Abe", "Abf"]);
        assert_eq!(compute_suggestions("Abz", &available).len(), 3);
    }

    #[test]
    fn unsupported_language_message_lists_suggestions() {
        let err = TranslateError::UnsupportedLanguage {
            name: "en".to_owned(),
            suggestions: names(&["En"]),
        };
        assert_eq!(err.to_string(), "unsupported language 'en', did you mean: En?");

        let err = TranslateError::UnsupportedLanguage {
            name: "DoesNotExist".to_owned(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unsupported language 'DoesNotExist'");
    }
}
