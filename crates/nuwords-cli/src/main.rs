//! nuwords CLI entry point.
//!
//! Provides command-line tools for spelling out numbers:
//! - `nuwords say` - Print numbers in words
//! - `nuwords languages` - List registered languages
//! - `nuwords check` - Validate dictionary files
//! - `nuwords export` - Print a language as a dictionary file

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, ExportArgs, LanguagesArgs, SayArgs, load_error_code, run_check, run_export,
    run_languages, run_say,
};
use miette::IntoDiagnostic;
use nuwords::global;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Spell out numbers in words.
#[derive(Debug, Parser)]
#[command(name = "nuwords")]
#[command(about = "Spell out numbers in words", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load a dictionary file as an extra language (NAME=PATH, repeatable)
    #[arg(long = "load", value_name = "NAME=PATH", value_parser = parse_key_val, global = true)]
    pub load: Vec<(String, PathBuf)>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print numbers in words
    Say(SayArgs),
    /// List registered languages
    Languages(LanguagesArgs),
    /// Check dictionary file syntax and completeness
    Check(CheckArgs),
    /// Print a registered language as a dictionary file
    Export(ExportArgs),
}

/// Parse a NAME=PATH argument.
fn parse_key_val(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid dictionary '{}': expected NAME=PATH", s))?;
    if name.is_empty() {
        return Err(format!("invalid dictionary '{}': name is empty", s));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, honoring `RUST_LOG` on top of the verbosity flag.
fn setup_tracing(verbose: bool) -> miette::Result<()> {
    let directive = if verbose { "nuwords=debug" } else { "nuwords=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(directive.parse().into_diagnostic()?),
        )
        .with_writer(stderr)
        .init();
    Ok(())
}

/// Register every `--load` dictionary in the global registry.
///
/// Stops at the first failure and returns its exit code.
fn load_dictionaries(load: &[(String, PathBuf)]) -> Result<(), i32> {
    for (name, path) in load {
        debug!(language = %name, path = %path.display(), "loading dictionary from --load");
        if let Err(e) = global::registry().load_file(name.as_str(), path) {
            eprintln!("Cannot load dictionary '{}': {}", name, e);
            return Err(load_error_code(&e));
        }
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose)?;

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    if let Err(code) = load_dictionaries(&cli.load) {
        exit(code);
    }

    let result = match cli.command {
        Commands::Say(args) => run_say(args),
        Commands::Languages(args) => run_languages(args),
        Commands::Check(args) => run_check(args),
        Commands::Export(args) => run_export(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
