//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn count_words_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("count-words"))
}

#[test]
fn test_cli_version() {
    let mut cmd = count_words_cmd();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("count-words"));
}

#[test]
fn test_cli_help() {
    let mut cmd = count_words_cmd();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Count whitespace-delimited words"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_count_inline_text() {
    let mut cmd = count_words_cmd();
    cmd.args(["count", "--text", "Zig is awesome"]);
    cmd.assert().success().stdout("Word count: 3\n");
}

#[test]
fn test_count_stdin() {
    let mut cmd = count_words_cmd();
    cmd.arg("count").write_stdin("  hello   world  \n");
    cmd.assert().success().stdout("Word count: 2\n");
}

#[test]
fn test_count_empty_stdin() {
    let mut cmd = count_words_cmd();
    cmd.arg("count").write_stdin("");
    cmd.assert().success().stdout("Word count: 0\n");
}

#[test]
fn test_count_multiple_files_with_total() {
    let dir = TempDir::new().expect("temp dir");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "a b c d e").expect("write a");
    fs::write(&b, "single").expect("write b");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "a.txt", "b.txt"]);
    cmd.assert().success().stdout("5  a.txt\n1  b.txt\n6  total\n");
}

#[test]
fn test_count_json_output() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("a.txt"), "one two\nthree\n").expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "a.txt", "--format", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 3"))
        .stdout(predicate::str::contains("\"lines\": 2"))
        .stdout(predicate::str::contains("\"source\": \"a.txt\""));
}

#[test]
fn test_count_rejects_invalid_whitespace_policy() {
    let mut cmd = count_words_cmd();
    cmd.args(["count", "--text", "x", "--whitespace", "tabs"]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid whitespace policy"));
}

#[test]
fn test_count_rejects_invalid_format() {
    let mut cmd = count_words_cmd();
    cmd.args(["count", "--text", "x", "--format", "xml"]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_ascii_policy_keeps_nbsp_inside_word() {
    let mut cmd = count_words_cmd();
    cmd.args(["count", "--whitespace", "ascii", "--text", "alpha\u{00A0}beta"]);
    cmd.assert().success().stdout("Word count: 1\n");

    let mut cmd = count_words_cmd();
    cmd.args(["count", "--text", "alpha\u{00A0}beta"]);
    cmd.assert().success().stdout("Word count: 2\n");
}

#[test]
fn test_missing_file_fails_after_reporting_others() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("ok.txt"), "fine words").expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "ok.txt", "missing.txt"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Word count: 2"))
        .stderr(predicate::str::contains("Failed to read 1 of 2 inputs"));
}

#[test]
fn test_binary_file_is_skipped() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("blob.bin"), [0u8, 1, 2, 3]).expect("write");
    fs::write(dir.path().join("doc.txt"), "three little words").expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "blob.bin", "doc.txt"]);
    cmd.assert()
        .success()
        .stdout("Word count: 3\n")
        .stderr(predicate::str::contains("Skipping binary input"));
}

#[test]
fn test_latin1_file_decodes() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("fr.txt"), b"caf\xe9 cr\xe8me br\xfbl\xe9e").expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args([
        "count",
        "fr.txt",
        "--encoding",
        "latin1",
        "--format",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 3"))
        .stdout(predicate::str::contains("\"encoding\": \"windows-1252\""));
}

#[test]
fn test_config_file_is_discovered() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("count-words.toml"), "format = 'json'\n").expect("write config");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "--text", "a b"]);
    cmd.assert().success().stdout(predicate::str::contains("\"total\""));
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("count-words.toml"), "format = 'json'\n").expect("write config");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "--text", "a b", "--format", "text"]);
    cmd.assert().success().stdout("Word count: 2\n");
}

#[test]
fn test_explicit_bad_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("custom.toml");
    fs::write(&config, "whitespace = 'tabs'\n").expect("write config");

    let mut cmd = count_words_cmd();
    cmd.args(["count", "--text", "x", "--config", config.to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_stats_table() {
    let mut cmd = count_words_cmd();
    cmd.args(["count", "--stats"]).write_stdin("one two\nthree\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lines words chars bytes  source"))
        .stdout(predicate::str::contains("    2     3    14    14  -"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = count_words_cmd();
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("count-words"));
}

#[test]
fn test_explicit_utf16le_without_bom() {
    let dir = TempDir::new().expect("temp dir");
    let bytes: Vec<u8> = "two words".encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect();
    fs::write(dir.path().join("u16.txt"), bytes).expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "u16.txt", "--encoding", "utf-16le"]);
    cmd.assert().success().stdout("Word count: 2\n");
}

#[test]
fn test_windows_1251_file_is_counted() {
    let dir = TempDir::new().expect("temp dir");
    // "Привет мир" in windows-1251.
    fs::write(dir.path().join("ru.txt"), b"\xcf\xf0\xe8\xe2\xe5\xf2 \xec\xe8\xf0").expect("write");

    let mut cmd = count_words_cmd();
    cmd.current_dir(dir.path()).args(["count", "ru.txt", "--encoding", "windows-1251"]);
    cmd.assert().success().stdout("Word count: 2\n");
}

#[test]
fn test_large_stdin_prints_plain_count() {
    let mut cmd = count_words_cmd();
    cmd.arg("count").write_stdin("word ".repeat(5000));
    cmd.assert().success().stdout("Word count: 5000\n");
}

#[test]
fn test_rust_log_replaces_default_level() {
    let mut cmd = count_words_cmd();
    cmd.env("RUST_LOG", "debug").args(["count", "--text", "a b"]);
    cmd.assert()
        .success()
        .stdout("Word count: 2\n")
        .stderr(predicate::str::contains("Effective config"));
}

#[test]
fn test_default_level_hides_debug() {
    let mut cmd = count_words_cmd();
    cmd.env_remove("RUST_LOG").args(["count", "--text", "a b"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Effective config").not());
}
