//! Dictionary file parser.
//!
//! Dictionary files (`.nuw`) define the five word tables of a language as
//! semicolon-terminated entries:
//!
//! ```text
//! // English
//! zero = "zero";
//! ones = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
//! teens = ["eleven", "twelve", ...];
//! tens = ["ten", "twenty", ...];
//! bigs = ["hundred", "thousand", "million", "billion", "trillion"];
//! ```
//!
//! Entries may appear in any order; each must appear exactly once.

pub mod error;
mod file;
mod write;

pub use error::ParseError;
pub use file::parse_dictionary;
pub use write::write_dictionary;
