//! Spell out integers in words.
//!
//! Numbers from 0 to 999,999,999,999,999 are decomposed into magnitude tiers
//! (ones, tens and teens, hundreds, thousands, millions, billions, trillions)
//! and rendered with the word tables of a language [`Dictionary`]. English is
//! built in as `"En"`; other languages are registered at runtime, either as
//! values or parsed from dictionary files.
//!
//! # Example
//!
//! ```
//! use nuwords::{InWords, TranslationConfig};
//!
//! assert_eq!(
//!     1_234_013_i64.in_words().unwrap(),
//!     "one million two hundred thirty-four thousand thirteen"
//! );
//! assert_eq!(300_u32.in_words().unwrap(), "three hundred");
//! assert!(1_000_000_000_000_000_i64.in_words().is_err());
//! ```

mod ext;
pub mod global;
pub mod parser;
pub mod translator;
pub mod types;

pub use ext::InWords;
pub use global::{languages, register, resolve};
pub use translator::{
    DictionaryRegistry, LoadError, MAX, Translate, TranslateError, TranslationConfig, Translator,
    compute_suggestions, load_dictionary,
};
pub use types::{Dictionary, DictionaryError, DictionaryTables, ENGLISH, LanguageId, Scale};
