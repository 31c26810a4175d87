//! CLI command implementations.

mod check;
mod export;
mod languages;
mod say;

use nuwords::LoadError;

pub use check::{CheckArgs, run_check};
pub use export::{ExportArgs, run_export};
pub use languages::{LanguagesArgs, run_languages};
pub use say::{SayArgs, run_say};

/// Exit code for a dictionary that could not be loaded.
///
/// Unreadable files are `NOINPUT`; files that do not parse are `DATAERR`.
pub fn load_error_code(err: &LoadError) -> i32 {
    match err {
        LoadError::Io { .. } => exitcode::NOINPUT,
        LoadError::File { .. } | LoadError::Parse(_) => exitcode::DATAERR,
    }
}
