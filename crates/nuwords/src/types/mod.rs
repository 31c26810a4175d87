mod dictionary;
mod language;
mod scale;

pub use dictionary::{Dictionary, DictionaryError, DictionaryTables};
pub use language::{ENGLISH, LanguageId};
pub use scale::Scale;
