//! Implementation of the `nuwords check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::Report;
use nuwords::parser::parse_dictionary;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::DictionaryDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Dictionary files to check (.nuw)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

/// Run the check command.
///
/// Every file is checked even after a failure. Returns `DATAERR` if any file
/// is invalid and `NOINPUT` if any file could not be read.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut code = exitcode::OK;

    for path in &args.files {
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                code = exitcode::NOINPUT;
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(e.to_string()),
                    line: None,
                    column: None,
                });
                if !args.json {
                    eprintln!("{} {}: {}", "error:".red(), path.display(), e);
                }
                continue;
            }
        };

        match parse_dictionary(&content) {
            Ok(_) => {
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: true,
                    error: None,
                    line: None,
                    column: None,
                });
                if !args.json {
                    println!("{} {}", "ok".green(), path.display());
                }
            }
            Err(e) => {
                if code == exitcode::OK {
                    code = exitcode::DATAERR;
                }
                let location = e.location();
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(e.to_string()),
                    line: location.map(|(line, _)| line),
                    column: location.map(|(_, column)| column),
                });
                if !args.json {
                    let diagnostic = DictionaryDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    }
    Ok(code)
}
