//! Number translation.
//!
//! This module holds the translation strategy trait, the built-in recursive
//! translator, its options, and the dictionary registry it resolves
//! languages against.

mod config;
pub(crate) mod error;
mod registry;
mod translate;

pub use config::TranslationConfig;
pub use error::{LoadError, TranslateError, compute_suggestions};
pub use registry::{DictionaryRegistry, load_dictionary};
pub use translate::{MAX, Translate, Translator};
