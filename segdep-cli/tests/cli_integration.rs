//! Integration tests for the segdep CLI
//!
//! `predicted.json` splits "Dogs" into "Do" + "gs" in the second sentence and
//! is otherwise perfect; `predicted-weak.json` segments perfectly but misses
//! two attachments.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn evaluate() -> Command {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("evaluate")
        .arg("-q")
        .arg("-p")
        .arg(fixture_path("predicted.json"))
        .arg("-g")
        .arg(fixture_path("gold.conllu"));
    cmd
}

#[test]
fn test_text_report() {
    evaluate()
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences:       2"))
        .stdout(predicate::str::contains("Word precision:  66.67"))
        .stdout(predicate::str::contains("Word recall:     75.00"))
        .stdout(predicate::str::contains("Word F1:         70.00"))
        .stdout(predicate::str::contains("UAS:             100.00"))
        .stdout(predicate::str::contains("Correct words:   4"))
        .stdout(predicate::str::contains("Gold words:      5"))
        .stdout(predicate::str::contains("Predicted words: 6"));
}

#[test]
fn test_per_sentence_text_report() {
    evaluate()
        .arg("--per-sentence")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sentence 1: P 100.00 R 100.00 F1 100.00 POS 100.00 UAS 100.00 LAS 100.00 (3/3 words)",
        ))
        .stdout(predicate::str::contains(
            "sentence 2: P 33.33 R 50.00 F1 40.00 POS 100.00 UAS 100.00 LAS 100.00 (1/2 words)",
        ));
}

#[test]
fn test_json_output() {
    let output = evaluate()
        .arg("-f")
        .arg("json")
        .arg("--per-sentence")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let sentences = report["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1]["sentence"], 2);
    assert_eq!(sentences[1]["predicted_list_len"], 3);
    assert_eq!(sentences[1]["correct_count"], 1);

    let epoch = &report["epoch"];
    assert_eq!(epoch["correct_words"], 4);
    assert_eq!(epoch["all_gold_words"], 5);
    assert_eq!(epoch["all_predicted_words"], 6);
    assert_eq!(epoch["uas_accuracy"], 100.0);
    assert_eq!(epoch["word_recall"], 75.0);
}

#[test]
fn test_markdown_output() {
    evaluate()
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Epoch"))
        .stdout(predicate::str::contains("| Metric | Value |"))
        .stdout(predicate::str::contains("| Word recall | 75.00 |"))
        .stdout(predicate::str::contains("## Sentences").not());
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.md");

    evaluate()
        .arg("-f")
        .arg("markdown")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("| UAS | 100.00 |"));
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = evaluate().arg("-f").arg("json").output().unwrap();
    let parallel = evaluate()
        .arg("-f")
        .arg("json")
        .arg("--parallel")
        .arg("--threads")
        .arg("2")
        .output()
        .unwrap();

    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_epoch_log_written() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    evaluate()
        .arg("--epoch")
        .arg("3")
        .arg("--loss")
        .arg("0.5")
        .arg("--log-dir")
        .arg(&log_dir)
        .assert()
        .success();

    let content = fs::read_to_string(log_dir.join("epoch-0003")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "epoch 3");
    assert_eq!(lines[1], "0.5");

    let record: Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(record["correct_words"], 4);
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("segdep.toml");
    fs::write(
        &config_path,
        "[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    let output = evaluate().arg("-c").arg(&config_path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["epoch"]["sentences"], 2);

    // Flags override the file
    evaluate()
        .arg("-c")
        .arg(&config_path)
        .arg("-f")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences:       2"));
}

#[test]
fn test_sentence_count_mismatch() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("evaluate")
        .arg("-q")
        .arg("-p")
        .arg(fixture_path("predicted-short.json"))
        .arg("-g")
        .arg(fixture_path("gold.conllu"));

    cmd.assert().failure().stderr(predicate::str::contains(
        "Evaluation error: predicted corpus has 1 sentences, gold corpus has 2",
    ));
}

#[test]
fn test_nonexistent_file() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("evaluate")
        .arg("-q")
        .arg("-p")
        .arg("nonexistent.json")
        .arg("-g")
        .arg(fixture_path("gold.conllu"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.json"));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("evaluate")
        .arg("-q")
        .arg("-p")
        .arg(fixture_path("predicted.json"))
        .arg("-g")
        .arg(fixture_path("gold.conllu"))
        .arg("--gold-format")
        .arg("json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parse error in tests/fixtures/gold.conllu at line 1"));
}

#[test]
fn test_select_best_epoch() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("select")
        .arg("-q")
        .arg("-p")
        .arg(fixture_path("predicted-weak.json"))
        .arg(fixture_path("predicted.json"))
        .arg("-g")
        .arg(fixture_path("gold.conllu"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("epoch 1: UAS 58.33 LAS 58.33 F1 100.00"))
        .stdout(predicate::str::contains("epoch 2: UAS 100.00 LAS 100.00 F1 70.00"))
        .stdout(predicate::str::contains(
            "best epoch: 2 (UAS 100.00), overall best F1 100.00",
        ));
}

#[test]
fn test_select_numbers_epochs_from_file_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::copy(
        fixture_path("predicted.json"),
        temp_dir.path().join("epoch-2.json"),
    )
    .unwrap();
    fs::copy(
        fixture_path("predicted-weak.json"),
        temp_dir.path().join("epoch-10.json"),
    )
    .unwrap();
    let pattern = temp_dir.path().join("epoch-*.json");

    let output = Command::cargo_bin("segdep")
        .unwrap()
        .arg("select")
        .arg("-q")
        .arg("-p")
        .arg(pattern.to_string_lossy().as_ref())
        .arg("-g")
        .arg(fixture_path("gold.conllu"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("epoch 2: UAS 100.00"));
    assert!(lines[0].ends_with("epoch-2.json) *"));
    assert!(lines[1].starts_with("epoch 10: UAS 58.33"));
    assert!(!lines[1].ends_with(" *"));
    assert_eq!(lines[2], "best epoch: 2 (UAS 100.00), overall best F1 100.00");
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Input formats:"))
        .stdout(predicate::str::contains("conllu"))
        .stdout(predicate::str::contains("Output formats:"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("segdep").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("select"));
}
