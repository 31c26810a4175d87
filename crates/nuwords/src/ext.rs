//! Spell out integers directly with `number.in_words()`.

use crate::translator::{Translate, TranslateError, TranslationConfig, Translator};

/// Word conversion for integer types.
///
/// # Example
///
/// ```
/// use nuwords::{InWords, TranslationConfig};
///
/// assert_eq!(0_i32.in_words().unwrap(), "zero");
/// assert_eq!(25u8.to_w().unwrap(), "twenty-five");
///
/// let config = TranslationConfig::builder().dashed(false).build();
/// assert_eq!(25_i64.in_words_with(&config).unwrap(), "twentyfive");
/// ```
pub trait InWords {
    /// Translate with any [`Translate`] implementation.
    fn in_words_using<T>(
        &self,
        translator: &T,
        config: &TranslationConfig,
    ) -> Result<String, TranslateError>
    where
        T: Translate + ?Sized;

    /// Translate with the built-in translator and default options.
    fn in_words(&self) -> Result<String, TranslateError> {
        self.in_words_with(&TranslationConfig::default())
    }

    /// Translate with the built-in translator.
    fn in_words_with(&self, config: &TranslationConfig) -> Result<String, TranslateError> {
        self.in_words_using(&Translator::new(), config)
    }

    /// Alias for [`InWords::in_words`].
    fn to_w(&self) -> Result<String, TranslateError> {
        self.in_words()
    }
}

macro_rules! impl_in_words {
    ($($t:ty),+ $(,)?) => {
        $(
            impl InWords for $t {
                fn in_words_using<T>(
                    &self,
                    translator: &T,
                    config: &TranslationConfig,
                ) -> Result<String, TranslateError>
                where
                    T: Translate + ?Sized,
                {
                    // Only unsigned values above i64::MAX fail here.
                    let number = i64::try_from(*self)
                        .map_err(|_| TranslateError::NumberNotSupported { number: i64::MAX })?;
                    translator.translate(number, config)
                }
            }
        )+
    };
}

impl_in_words!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
