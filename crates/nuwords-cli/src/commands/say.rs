//! Implementation of the `nuwords say` command.

use std::path::PathBuf;

use nuwords::{LanguageId, Translate, TranslationConfig, Translator, load_dictionary};
use serde::Serialize;

use super::load_error_code;

/// Arguments for the say command.
#[derive(Debug, clap::Args)]
pub struct SayArgs {
    /// Numbers to spell out
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Registered language name
    #[arg(long, env = "NUWORDS_LANG", default_value = nuwords::ENGLISH)]
    pub lang: String,

    /// Dictionary file to translate with; takes precedence over --lang
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Join tens and ones without a hyphen
    #[arg(long)]
    pub no_dash: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a translated number.
#[derive(Serialize)]
pub struct SayResult {
    pub number: i64,
    pub words: String,
}

/// Run the say command.
pub fn run_say(args: SayArgs) -> miette::Result<i32> {
    let language = match &args.dictionary {
        Some(path) => match load_dictionary(path) {
            Ok(dictionary) => LanguageId::from(dictionary),
            Err(e) => {
                eprintln!("Cannot load dictionary: {}", e);
                return Ok(load_error_code(&e));
            }
        },
        None => LanguageId::from(args.lang.as_str()),
    };
    let config = TranslationConfig::builder()
        .language(language)
        .dashed(!args.no_dash)
        .build();

    let translator = Translator::new();
    let mut results = Vec::with_capacity(args.numbers.len());
    for &number in &args.numbers {
        match translator.translate(number, &config) {
            Ok(words) => results.push(SayResult { number, words }),
            Err(e) => {
                if args.json {
                    let output = serde_json::json!({
                        "number": number,
                        "error": e.to_string()
                    });
                    eprintln!(
                        "{}",
                        serde_json::to_string_pretty(&output)
                            .expect("JSON serialization should not fail")
                    );
                } else {
                    eprintln!("Translation error: {}", e);
                }
                return Ok(exitcode::DATAERR);
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    } else {
        for result in &results {
            println!("{}", result.words);
        }
    }
    Ok(exitcode::OK)
}
