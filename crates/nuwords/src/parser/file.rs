//! Dictionary file format parser.

use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::error::ParseError;
use crate::types::{Dictionary, DictionaryTables};

/// The right-hand side of an entry.
enum Value {
    Word(String),
    List(Vec<String>),
}

/// A parsed `key = value;` entry with the input remaining at its start.
struct Entry<'i> {
    at: &'i str,
    key: &'i str,
    value: Value,
}

/// Parse a dictionary file.
///
/// # Example
///
/// ```
/// use nuwords::parser::parse_dictionary;
///
/// let dictionary = parse_dictionary(r#"
///     zero = "nul";
///     ones = ["een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen"];
///     teens = ["elf", "twaalf", "dertien", "veertien", "vijftien",
///              "zestien", "zeventien", "achttien", "negentien"];
///     tens = ["tien", "twintig", "dertig", "veertig", "vijftig",
///             "zestig", "zeventig", "tachtig", "negentig"];
///     bigs = ["honderd", "duizend", "miljoen", "miljard", "biljoen"];
/// "#).unwrap();
/// assert_eq!(dictionary.zero(), "nul");
/// ```
pub fn parse_dictionary(input: &str) -> Result<Dictionary, ParseError> {
    let mut remaining = input;
    let entries = match file(&mut remaining) {
        Ok(entries) => entries,
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            return Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {}", e),
            });
        }
    };

    let mut tables = PartialTables::default();
    for entry in entries {
        tables.insert(input, entry)?;
    }
    Ok(Dictionary::new(tables.finish()?)?)
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Tables collected so far, each set at most once.
#[derive(Default)]
struct PartialTables {
    zero: Option<String>,
    ones: Option<[String; 9]>,
    teens: Option<[String; 9]>,
    tens: Option<[String; 9]>,
    bigs: Option<[String; 5]>,
}

impl PartialTables {
    fn insert(&mut self, input: &str, entry: Entry<'_>) -> Result<(), ParseError> {
        let (line, column) = calculate_position(input, entry.at);
        let at = Location {
            key: entry.key,
            line,
            column,
        };
        match entry.key {
            "zero" => at.fill(&mut self.zero, at.word(entry.value)?),
            "ones" => at.fill(&mut self.ones, at.list(entry.value)?),
            "teens" => at.fill(&mut self.teens, at.list(entry.value)?),
            "tens" => at.fill(&mut self.tens, at.list(entry.value)?),
            "bigs" => at.fill(&mut self.bigs, at.list(entry.value)?),
            _ => Err(ParseError::UnknownEntry {
                key: entry.key.to_owned(),
                line,
                column,
            }),
        }
    }

    fn finish(self) -> Result<DictionaryTables, ParseError> {
        Ok(DictionaryTables {
            zero: self.zero.ok_or(ParseError::MissingEntry { key: "zero" })?,
            ones: self.ones.ok_or(ParseError::MissingEntry { key: "ones" })?,
            teens: self.teens.ok_or(ParseError::MissingEntry { key: "teens" })?,
            tens: self.tens.ok_or(ParseError::MissingEntry { key: "tens" })?,
            bigs: self.bigs.ok_or(ParseError::MissingEntry { key: "bigs" })?,
        })
    }
}

/// Where an entry was defined, for error reporting.
struct Location<'a> {
    key: &'a str,
    line: usize,
    column: usize,
}

impl Location<'_> {
    fn fill<T>(&self, slot: &mut Option<T>, value: T) -> Result<(), ParseError> {
        if slot.is_some() {
            return Err(ParseError::DuplicateEntry {
                key: self.key.to_owned(),
                line: self.line,
                column: self.column,
            });
        }
        *slot = Some(value);
        Ok(())
    }

    fn word(&self, value: Value) -> Result<String, ParseError> {
        match value {
            Value::Word(word) => Ok(word),
            Value::List(_) => Err(ParseError::WrongShape {
                key: self.key.to_owned(),
                expected: "a single quoted word",
                line: self.line,
                column: self.column,
            }),
        }
    }

    fn list<const N: usize>(&self, value: Value) -> Result<[String; N], ParseError> {
        let words = match value {
            Value::List(words) => words,
            Value::Word(_) => {
                return Err(ParseError::WrongShape {
                    key: self.key.to_owned(),
                    expected: "a list of words",
                    line: self.line,
                    column: self.column,
                });
            }
        };
        <[String; N]>::try_from(words).map_err(|words| ParseError::WrongArity {
            key: self.key.to_owned(),
            expected: N,
            got: words.len(),
            line: self.line,
            column: self.column,
        })
    }
}

/// Parse all entries of a file.
fn file<'i>(input: &mut &'i str) -> ModalResult<Vec<Entry<'i>>> {
    skip_ws_and_comments(input)?;
    let mut entries = Vec::new();
    while !input.is_empty() {
        let at = *input;
        let (key, value) = entry(input)?;
        entries.push(Entry { at, key, value });
        skip_ws_and_comments(input)?;
    }
    Ok(entries)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: key = value ;
fn entry<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Value)> {
    let key = identifier(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = alt((word_list.map(Value::List), quoted.map(Value::Word))).parse_next(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((key, value))
}

/// Parse an entry key.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse a word list with trailing comma support: [ "a", "b", ]
fn word_list(input: &mut &str) -> ModalResult<Vec<String>> {
    delimited(
        ('[', skip_ws_and_comments),
        terminated(
            separated(
                0..,
                quoted,
                (skip_ws_and_comments, ',', skip_ws_and_comments),
            ),
            opt((skip_ws_and_comments, ',')),
        ),
        (skip_ws_and_comments, ']'),
    )
    .parse_next(input)
}

/// Parse a quoted word: "content"
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., word_char), '"').parse_next(input)
}

/// Parse one character of a quoted word, resolving \" and \\ escapes.
fn word_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', one_of(['"', '\\'])), none_of(['"', '\\']))).parse_next(input)
}
