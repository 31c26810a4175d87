//! End-to-end tests for the `nuwords` binary.

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

const DUTCH: &str = r#"
zero = "nul";
ones = ["een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen"];
teens = ["elf", "twaalf", "dertien", "veertien", "vijftien", "zestien", "zeventien", "achttien", "negentien"];
tens = ["tien", "twintig", "dertig", "veertig", "vijftig", "zestig", "zeventig", "tachtig", "negentig"];
bigs = ["honderd", "duizend", "miljoen", "miljard", "biljoen"];
"#;

fn nuwords() -> Command {
    let mut cmd = Command::cargo_bin("nuwords").unwrap();
    cmd.env_remove("NUWORDS_LANG").env_remove("RUST_LOG");
    cmd
}

fn dictionary_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn say_prints_each_number() {
    let out = stdout(nuwords().args(["say", "0", "25", "1234013"]));
    assert_eq!(
        out,
        "zero\ntwenty-five\none million two hundred thirty-four thousand thirteen\n"
    );
}

#[test]
fn say_without_dash() {
    let out = stdout(nuwords().args(["say", "--no-dash", "25"]));
    assert_eq!(out, "twentyfive\n");
}

#[test]
fn say_rejects_out_of_range() {
    nuwords()
        .args(["say", "1000000000000000"])
        .assert()
        .code(exitcode::DATAERR);
    nuwords().args(["say", "-1"]).assert().code(exitcode::DATAERR);
}

#[test]
fn say_rejects_unknown_language() {
    let output = nuwords()
        .args(["say", "--lang", "Klingon", "5"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported language 'Klingon'"));
}

#[test]
fn say_json_output() {
    let out = stdout(nuwords().args(["say", "--json", "30"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["number"], 30);
    assert_eq!(json[0]["words"], "thirty");
}

#[test]
fn say_with_dictionary_file() {
    let file = dictionary_file(DUTCH);
    let out = stdout(
        nuwords()
            .args(["say", "--dictionary"])
            .arg(file.path())
            .arg("2013"),
    );
    assert_eq!(out, "twee duizend dertien\n");
}

#[test]
fn loaded_language_is_selectable_by_name() {
    let file = dictionary_file(DUTCH);
    let out = stdout(
        nuwords()
            .arg("--load")
            .arg(format!("Nl={}", file.path().display()))
            .args(["say", "--lang", "Nl", "10"]),
    );
    assert_eq!(out, "tien\n");
}

#[test]
fn languages_lists_builtin_english() {
    let out = stdout(nuwords().args(["languages", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["name"], "En");
    assert_eq!(
        json[0]["sample"],
        "one million two hundred thirty-four thousand thirteen"
    );
}

#[test]
fn check_accepts_valid_file() {
    let file = dictionary_file(DUTCH);
    nuwords()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(exitcode::OK);
}

#[test]
fn check_reports_invalid_file() {
    let file = dictionary_file("zero = \"nul\";\nextra = \"x\";\n");
    let out = stdout(nuwords().args(["check", "--json"]).arg(file.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["ok"], false);
    assert_eq!(json[0]["line"], 2);
    assert_eq!(json[0]["column"], 1);

    nuwords()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(exitcode::DATAERR);
}

#[test]
fn check_reports_missing_file() {
    nuwords()
        .args(["check", "/nonexistent/dutch.nuw"])
        .assert()
        .code(exitcode::NOINPUT);
}

#[test]
fn check_reports_crlf_file_with_multibyte_comment() {
    let file = dictionary_file("zero = \"z\";\r\n// a\r\n// café\r\n@\r\n");
    let output = nuwords().arg("check").arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("panicked"), "{stderr}");

    let out = stdout(nuwords().args(["check", "--json"]).arg(file.path()));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["line"], 4);
    assert_eq!(json[0]["column"], 1);
}

#[test]
fn say_with_missing_dictionary_file() {
    nuwords()
        .args(["say", "--dictionary", "/nonexistent/dutch.nuw", "5"])
        .assert()
        .code(exitcode::NOINPUT);
}

#[test]
fn say_with_invalid_dictionary_file() {
    let file = dictionary_file("zero = \"nul\";\n");
    nuwords()
        .args(["say", "--dictionary"])
        .arg(file.path())
        .arg("5")
        .assert()
        .code(exitcode::DATAERR);
}

#[test]
fn load_with_missing_file() {
    nuwords()
        .args(["--load", "Nl=/nonexistent/dutch.nuw", "say", "5"])
        .assert()
        .code(exitcode::NOINPUT);
}

#[test]
fn load_with_invalid_file() {
    let file = dictionary_file("zero = \"nul\";\nextra = \"x\";\n");
    nuwords()
        .arg("--load")
        .arg(format!("Nl={}", file.path().display()))
        .args(["say", "5"])
        .assert()
        .code(exitcode::DATAERR);
}

#[test]
fn export_round_trips_through_check() {
    let exported = stdout(nuwords().args(["export", "En"]));
    assert!(exported.contains("tens = [\"ten\", \"twenty\", \"thirty\", \"forty\""));

    let file = dictionary_file(&exported);
    nuwords()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(exitcode::OK);
}
