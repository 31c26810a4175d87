use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Scale;

/// The word tables for one language.
///
/// A `Dictionary` is always complete: every table has a fixed length and
/// construction rejects blank words, so a value that exists can be used for
/// any number in the supported range.
///
/// Dictionaries are immutable once built and are normally shared behind an
/// `Arc` by the [`DictionaryRegistry`](crate::DictionaryRegistry).
///
/// # Example
///
/// ```
/// use nuwords::Dictionary;
///
/// let english = Dictionary::english();
/// assert_eq!(english.zero(), "zero");
/// assert_eq!(english.tens()[0], "ten");
/// assert_eq!(english.teens()[0], "eleven");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DictionaryTables", into = "DictionaryTables")]
pub struct Dictionary {
    zero: String,
    ones: [String; 9],
    teens: [String; 9],
    tens: [String; 9],
    bigs: [String; 5],
}

/// Raw, unvalidated word tables.
///
/// This is the input to [`Dictionary::new`] and the serialized form of a
/// dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryTables {
    /// Word for 0.
    pub zero: String,
    /// Words for 1 through 9.
    pub ones: [String; 9],
    /// Words for 11 through 19.
    pub teens: [String; 9],
    /// Words for 10, 20, ... 90.
    pub tens: [String; 9],
    /// Scale words for 10^2, 10^3, 10^6, 10^9 and 10^12.
    pub bigs: [String; 5],
}

/// A dictionary failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// A table entry is empty or only whitespace.
    #[error("word {index} of table '{table}' is blank")]
    BlankWord { table: &'static str, index: usize },
}

impl Dictionary {
    /// Validate word tables and build a dictionary from them.
    pub fn new(tables: DictionaryTables) -> Result<Self, DictionaryError> {
        check_table("zero", slice::from_ref(&tables.zero))?;
        check_table("ones", &tables.ones)?;
        check_table("teens", &tables.teens)?;
        check_table("tens", &tables.tens)?;
        check_table("bigs", &tables.bigs)?;

        let DictionaryTables {
            zero,
            ones,
            teens,
            tens,
            bigs,
        } = tables;
        Ok(Self {
            zero,
            ones,
            teens,
            tens,
            bigs,
        })
    }

    /// The built-in English dictionary.
    pub fn english() -> Self {
        Self {
            zero: "zero".to_owned(),
            ones: words([
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
            ]),
            teens: words([
                "eleven",
                "twelve",
                "thirteen",
                "fourteen",
                "fifteen",
                "sixteen",
                "seventeen",
                "eighteen",
                "nineteen",
            ]),
            tens: words([
                "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
            ]),
            bigs: words(["hundred", "thousand", "million", "billion", "trillion"]),
        }
    }

    /// Word for 0.
    pub fn zero(&self) -> &str {
        &self.zero
    }

    /// Words for 1 through 9; index 0 is the word for 1.
    pub fn ones(&self) -> &[String; 9] {
        &self.ones
    }

    /// Words for 11 through 19; index 0 is the word for 11.
    pub fn teens(&self) -> &[String; 9] {
        &self.teens
    }

    /// Words for multiples of ten; index 0 is the word for 10.
    pub fn tens(&self) -> &[String; 9] {
        &self.tens
    }

    /// Scale words in ascending order: hundred, thousand, million, billion, trillion.
    pub fn bigs(&self) -> &[String; 5] {
        &self.bigs
    }

    /// Scale word for a given magnitude.
    pub fn big(&self, scale: Scale) -> &str {
        &self.bigs[scale.index()]
    }

    /// Copy the word tables out of this dictionary.
    pub fn to_tables(&self) -> DictionaryTables {
        self.clone().into()
    }
}

impl TryFrom<DictionaryTables> for Dictionary {
    type Error = DictionaryError;

    fn try_from(tables: DictionaryTables) -> Result<Self, Self::Error> {
        Self::new(tables)
    }
}

impl From<Dictionary> for DictionaryTables {
    fn from(dictionary: Dictionary) -> Self {
        let Dictionary {
            zero,
            ones,
            teens,
            tens,
            bigs,
        } = dictionary;
        Self {
            zero,
            ones,
            teens,
            tens,
            bigs,
        }
    }
}

fn check_table(table: &'static str, words: &[String]) -> Result<(), DictionaryError> {
    match words.iter().position(|word| word.trim().is_empty()) {
        Some(index) => Err(DictionaryError::BlankWord { table, index }),
        None => Ok(()),
    }
}

fn words<const N: usize>(list: [&str; N]) -> [String; N] {
    list.map(str::to_owned)
}
