use std::fmt::Write;

use crate::types::Dictionary;

/// Render a dictionary in the `.nuw` file format.
///
/// The output parses back to an equal dictionary.
pub fn write_dictionary(dictionary: &Dictionary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "zero = {};", quote(dictionary.zero()));
    for (key, words) in [
        ("ones", dictionary.ones().as_slice()),
        ("teens", dictionary.teens().as_slice()),
        ("tens", dictionary.tens().as_slice()),
        ("bigs", dictionary.bigs().as_slice()),
    ] {
        let list: Vec<String> = words.iter().map(|word| quote(word)).collect();
        let _ = writeln!(out, "{key} = [{}];", list.join(", "));
    }
    out
}

fn quote(word: &str) -> String {
    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('"');
    for c in word.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
