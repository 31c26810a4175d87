//! Implementation of the `nuwords languages` command.

use nuwords::{InWords, TranslationConfig};

use crate::output::table::{LanguageRow, format_languages_table};

/// Number shown next to each language as a sample.
const SAMPLE: u32 = 1_234_013;

/// Arguments for the languages command.
#[derive(Debug, clap::Args)]
pub struct LanguagesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> miette::Result<i32> {
    let mut rows = Vec::new();
    for name in nuwords::languages() {
        let sample = SAMPLE
            .in_words_with(&TranslationConfig::with_language(name.as_str()))
            .map_err(|e| miette::miette!("{}", e))?;
        rows.push(LanguageRow { name, sample });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_languages_table(&rows));
    }
    Ok(exitcode::OK)
}
