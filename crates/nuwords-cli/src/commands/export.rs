//! Implementation of the `nuwords export` command.

use nuwords::LanguageId;
use nuwords::parser::write_dictionary;

/// Arguments for the export command.
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Registered language name
    #[arg(default_value = nuwords::ENGLISH)]
    pub lang: String,

    /// Output as JSON instead of dictionary file syntax
    #[arg(long)]
    pub json: bool,
}

/// Run the export command.
pub fn run_export(args: ExportArgs) -> miette::Result<i32> {
    let dictionary = match nuwords::resolve(&LanguageId::from(args.lang.as_str())) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(dictionary.as_ref())
                .expect("JSON serialization should not fail")
        );
    } else {
        print!("{}", write_dictionary(&dictionary));
    }
    Ok(exitcode::OK)
}
