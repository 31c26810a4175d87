//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use serde::Serialize;

/// A registered language with a sample translation.
#[derive(Debug, Serialize)]
pub struct LanguageRow {
    /// Registered name (e.g., "En").
    pub name: String,
    /// Sample number spelled out in this language.
    pub sample: String,
}

/// Format registered languages as a table.
pub fn format_languages_table(rows: &[LanguageRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Sample"]);

    for row in rows {
        table.add_row(vec![row.name.clone(), row.sample.clone()]);
    }

    table
}
