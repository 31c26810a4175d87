//! Miette diagnostic wrapper for dictionary parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use nuwords::parser::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for dictionary parse errors.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(nuwords::dictionary))]
pub struct DictionaryDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl DictionaryDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let span = err
            .location()
            .map(|(line, column)| SourceSpan::from((byte_offset(content, line, column), 1)));

        let help = match err {
            ParseError::MissingEntry { .. } => {
                Some("a dictionary defines zero, ones, teens, tens and bigs".to_string())
            }
            ParseError::UnknownEntry { .. } => {
                Some("valid entries are zero, ones, teens, tens and bigs".to_string())
            }
            _ => None,
        };

        DictionaryDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
            message: err.to_string(),
            help,
        }
    }
}

/// Byte offset of a 1-based line and character column, clamped to `content`.
///
/// Lines start after each `'\n'`, so a `'\r'` stays on the line it ends.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start = match line.checked_sub(2) {
        Some(newlines) => content
            .match_indices('\n')
            .nth(newlines)
            .map_or(content.len(), |(index, _)| index + 1),
        None => 0,
    };
    content[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(content.len(), |(offset, _)| line_start + offset)
}

#[cfg(test)]
mod tests {
    use nuwords::parser::parse_dictionary;

    use super::*;

    #[test]
    fn offset_counts_columns_in_characters() {
        let content = "ab\ncafé x";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 6), 9);
    }

    #[test]
    fn offset_is_clamped_past_the_end() {
        assert_eq!(byte_offset("ab\ncd", 9, 1), 5);
        assert_eq!(byte_offset("ab\ncd", 2, 9), 5);
    }

    #[test]
    fn span_follows_crlf_lines_with_multibyte_text() {
        let content = "zero = \"z\";\r\n// a\r\n// café\r\n@\r\n";
        let err = parse_dictionary(content).unwrap_err();
        assert_eq!(err.location(), Some((4, 1)));

        let diagnostic =
            DictionaryDiagnostic::from_parse_error(Path::new("crlf.nuw"), content, &err);
        let span = diagnostic.span.unwrap();
        assert_eq!(&content[span.offset()..], "@\r\n");
    }
}
