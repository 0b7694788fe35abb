//! Integration tests for the dictum CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn dictum() -> Command {
    let mut cmd = Command::cargo_bin("dictum").unwrap();
    cmd.env_remove("DICTUM_LOCALE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_delete_closest_phrase() {
    let mut cmd = dictum();
    cmd.arg("replace")
        .arg("the")
        .arg("-i")
        .arg(fixture_path("english-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The cow jumped over moon."))
        .stdout(predicate::str::contains("caret: 19"));
}

#[test]
fn test_replace_with_phrase() {
    let mut cmd = dictum();
    cmd.args(["replace", "cow", "--with", "dog", "--text", "The cow jumped"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The dog jumped"))
        .stdout(predicate::str::contains("caret: 7"));
}

#[test]
fn test_negative_caret_is_echoed() {
    let mut cmd = dictum();
    cmd.args(["replace", "cat", "--text", "the cat", "--caret", "-1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("the cat\ncaret: -1\n"));
}

#[test]
fn test_japanese_replace_ignores_word_boundaries() {
    let mut cmd = dictum();
    cmd.args(["-l", "ja-JP", "replace", "テニス", "--with", "サッカー", "-i"])
        .arg(fixture_path("japanese-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "私はサッカーが好きです。バスケットボールも好きです。",
        ))
        .stdout(predicate::str::contains("caret: 6"));
}

#[test]
fn test_japanese_text_needs_unspaced_locale() {
    let mut cmd = dictum();
    cmd.args(["replace", "テニス", "--with", "サッカー", "-i"])
        .arg(fixture_path("japanese-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("私はテニスが好きです。"))
        .stdout(predicate::str::contains("caret: 25"));
}

#[test]
fn test_insert_before() {
    let mut cmd = dictum();
    cmd.args(["insert-before", "big", "--before", "moon", "-i"])
        .arg(fixture_path("english-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The cow jumped over the big moon."))
        .stdout(predicate::str::contains("caret: 27"));
}

#[test]
fn test_select_between() {
    let mut cmd = dictum();
    cmd.args(["select", "--from", "is", "--to", "test", "--text", "This is a test."]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("selection: 5..14"))
        .stdout(predicate::str::contains("is a test"));
}

#[test]
fn test_select_reversed_phrases() {
    let mut cmd = dictum();
    cmd.args(["select", "--from", "test", "--to", "is", "--text", "This is a test"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no selection"));
}

#[test]
fn test_sentence_navigation() {
    let mut cmd = dictum();
    cmd.args(["next-sentence", "--caret", "0", "-i"])
        .arg(fixture_path("japanese-field.txt"));
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("caret: 11\n"));

    let mut cmd = dictum();
    cmd.args([
        "prev-sentence",
        "--text",
        "Hello world. Goodnight world.",
        "--caret",
        "30",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("caret: 12\n"));
}

#[test]
fn test_commit_capitalizes_and_spaces() {
    let mut cmd = dictum();
    cmd.args(["commit", "more text", "--text", "Some text."]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff(" More text\n"));
}

#[test]
fn test_capitalize_mid_sentence() {
    let mut cmd = dictum();
    cmd.args(["capitalize", "More text", "--text", "Some text"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("more text\n"));
}

#[test]
fn test_json_output() {
    let mut cmd = dictum();
    cmd.args(["-f", "json", "commit", "more text", "--text", "Some text."]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["command"]["op"], "commit");
    assert_eq!(json["outcome"]["kind"], "text");
    assert_eq!(json["outcome"]["result"], " More text");
    assert_eq!(json["field"]["value"], "Some text. More text");
    assert_eq!(json["field"]["caret_index"], 20);
}

#[test]
fn test_config_file() {
    let mut cmd = dictum();
    cmd.arg("--config")
        .arg(fixture_path("dictum.toml"))
        .args(["next-sentence", "--caret", "0", "-i"])
        .arg(fixture_path("japanese-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"caret","result":11"#));
}

#[test]
fn test_command_line_overrides_config_file() {
    let mut cmd = dictum();
    cmd.arg("--config")
        .arg(fixture_path("dictum.toml"))
        .args(["-l", "en", "-f", "text"])
        .args(["replace", "テニス", "--with", "サッカー", "-i"])
        .arg(fixture_path("japanese-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("私はテニスが好きです。"));
}

#[test]
fn test_locale_from_environment() {
    let mut cmd = dictum();
    cmd.env("DICTUM_LOCALE", "ja")
        .args(["replace", "テニス", "--with", "サッカー", "-i"])
        .arg(fixture_path("japanese-field.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("caret: 6"));
}

#[test]
fn test_input_from_stdin() {
    let mut cmd = dictum();
    cmd.args(["next-sentence", "--caret", "0", "-i", "-"])
        .write_stdin("This?\nIs! A. Test;\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("caret: 5\n"));
}

#[test]
fn test_missing_text() {
    let mut cmd = dictum();
    cmd.args(["next-sentence"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No text given"));
}

#[test]
fn test_nonexistent_input_file() {
    let mut cmd = dictum();
    cmd.args(["next-sentence", "-i", "nonexistent.txt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    let mut cmd = dictum();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["next-sentence", "--text", "A. B."]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format: yaml"));
}

#[test]
fn test_verbose_logging() {
    let mut cmd = dictum();
    cmd.args(["-v", "next-sentence", "--text", "A. B."]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Editing with locale en"));
}

#[test]
fn test_quiet_mode() {
    let mut cmd = dictum();
    cmd.args(["-q", "-vv", "next-sentence", "--text", "A. B."]);

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_list_locales() {
    let mut cmd = dictum();
    cmd.args(["list", "locales"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Built-in locales:"))
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("no spaces"));
}

#[test]
fn test_list_formats() {
    let mut cmd = dictum();
    cmd.args(["list", "formats"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_help_message() {
    let mut cmd = dictum();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dictation editing"))
        .stdout(predicate::str::contains("replace"))
        .stdout(predicate::str::contains("next-sentence"));
}

#[test]
fn test_version_flag() {
    let mut cmd = dictum();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dictum"));
}
