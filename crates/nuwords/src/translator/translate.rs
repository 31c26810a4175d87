//! The built-in translation strategy.

use std::sync::Arc;

use bon::Builder;
use tracing::trace;

use crate::global;
use crate::translator::config::TranslationConfig;
use crate::translator::error::TranslateError;
use crate::translator::registry::DictionaryRegistry;
use crate::types::{Dictionary, Scale};

/// Largest number that can be translated.
pub const MAX: i64 = 999_999_999_999_999;

/// A strategy for turning a number into words.
///
/// [`Translator`] is the built-in implementation. Any other type implementing
/// this trait can be passed wherever a translator is accepted, for example to
/// [`InWords::in_words_using`](crate::InWords::in_words_using).
pub trait Translate {
    /// Translate `number` according to `config`.
    fn translate(&self, number: i64, config: &TranslationConfig) -> Result<String, TranslateError>;
}

/// Translates numbers by recursive decomposition into magnitude tiers.
///
/// Language names are resolved through the process-wide registry unless the
/// translator is built with its own.
///
/// # Example
///
/// ```
/// use nuwords::{Translate, TranslationConfig, Translator};
///
/// let translator = Translator::new();
/// let words = translator
///     .translate(1_234_013, &TranslationConfig::default())
///     .unwrap();
/// assert_eq!(words, "one million two hundred thirty-four thousand thirteen");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Translator {
    /// Registry used to resolve language names. Uses the global registry when unset.
    registry: Option<Arc<DictionaryRegistry>>,
}

impl Translator {
    /// Create a translator that resolves names through the global registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator that resolves names through `registry`.
    pub fn with_registry(registry: Arc<DictionaryRegistry>) -> Self {
        Translator::builder().registry(registry).build()
    }

    /// The registry this translator resolves names against.
    pub fn registry(&self) -> &DictionaryRegistry {
        match &self.registry {
            Some(registry) => registry.as_ref(),
            None => global::registry(),
        }
    }
}

impl Translate for Translator {
    fn translate(&self, number: i64, config: &TranslationConfig) -> Result<String, TranslateError> {
        if !(0..=MAX).contains(&number) {
            return Err(TranslateError::NumberNotSupported { number });
        }
        let dictionary = self.registry().resolve(config.language())?;
        trace!(number, language = %config.language(), "translating");

        let words = Decomposer {
            dictionary: &dictionary,
            separator: config.separator(),
        }
        .words(number, false)?;
        Ok(words.trim().to_owned())
    }
}

/// One translation in progress against a resolved dictionary.
struct Decomposer<'a> {
    dictionary: &'a Dictionary,
    separator: &'static str,
}

impl Decomposer<'_> {
    /// Spell out `number`.
    ///
    /// `suppress_zero` is set for every remainder so that 0 only renders as
    /// a word at the top level.
    fn words(&self, number: i64, suppress_zero: bool) -> Result<String, TranslateError> {
        let words = match number {
            0 if suppress_zero => String::new(),
            0 => self.dictionary.zero().to_owned(),
            1..=9 => pick(self.dictionary.ones(), number, number - 1)?,
            10 => self.dictionary.tens()[0].clone(),
            11..=19 => pick(self.dictionary.teens(), number, number - 11)?,
            20..=99 => self.tens(number)?,
            100..=999 => self.scaled(number, Scale::Hundred)?,
            1_000..=999_999 => self.scaled(number, Scale::Thousand)?,
            1_000_000..=999_999_999 => self.scaled(number, Scale::Million)?,
            1_000_000_000..=999_999_999_999 => self.scaled(number, Scale::Billion)?,
            1_000_000_000_000..=MAX => self.scaled(number, Scale::Trillion)?,
            _ => return Err(TranslateError::NumberNotSupported { number }),
        };
        Ok(words)
    }

    /// 20 through 99: tens word, then separator and ones word if any.
    fn tens(&self, number: i64) -> Result<String, TranslateError> {
        let (tens, ones) = split(number, 10);
        let mut words = pick(self.dictionary.tens(), number, tens - 1)?;
        if ones > 0 {
            words.push_str(self.separator);
            words.push_str(&self.words(ones, true)?);
        }
        Ok(words)
    }

    /// Quotient, scale word, then remainder if any, joined by single spaces.
    fn scaled(&self, number: i64, scale: Scale) -> Result<String, TranslateError> {
        let (quotient, remainder) = split(number, scale.value());
        let mut words = String::new();
        if quotient > 0 {
            words.push_str(&self.words(quotient, true)?);
            words.push(' ');
            words.push_str(self.dictionary.big(scale));
        }
        if remainder > 0 {
            words.push(' ');
            words.push_str(&self.words(remainder, true)?);
        }
        Ok(words)
    }
}

fn split(number: i64, divisor: i64) -> (i64, i64) {
    (number.div_euclid(divisor), number.rem_euclid(divisor))
}

/// Word at `index` of a nine-word table, or `NumberNotSupported` for `number`
/// when the index falls outside it.
fn pick(table: &[String; 9], number: i64, index: i64) -> Result<String, TranslateError> {
    usize::try_from(index)
        .ok()
        .and_then(|index| table.get(index))
        .cloned()
        .ok_or(TranslateError::NumberNotSupported { number })
}
