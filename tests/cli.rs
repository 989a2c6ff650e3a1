use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pronunciation() -> Command {
    Command::cargo_bin("pronunciation").unwrap()
}

fn echolingo() -> Command {
    Command::cargo_bin("echolingo").unwrap()
}

#[test]
fn score_prints_breakdown_and_records_history() {
    let dir = tempdir().unwrap();
    pronunciation()
        .args([
            "score",
            "--spoken",
            "hello how are you",
            "--target",
            "Hello, how are you?",
            "--confidence",
            "0.9",
            "--data-dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pronunciation score: 100/100"))
        .stdout(predicate::str::contains("Recognizer confidence: 90%"))
        .stdout(predicate::str::contains("Text match: 89%"))
        .stdout(predicate::str::contains("Excellent pronunciation"));

    assert!(dir.path().join("pronunciation_history.json").exists());

    pronunciation()
        .arg("history")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100 [high]"))
        .stdout(predicate::str::contains("\"Hello, how are you?\""));
}

#[test]
fn score_json_output_is_parseable() {
    let output = pronunciation()
        .args([
            "score",
            "--spoken",
            "banana",
            "--target",
            "apple pie recipe",
            "--confidence",
            "0.8",
            "--no-history",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 70);
    assert_eq!(json["similarityPct"], 0);
}

#[test]
fn blank_target_is_rejected() {
    pronunciation()
        .args(["score", "--spoken", "hello", "--target", "   ", "--no-history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("practice target"));
}

#[test]
fn history_clear_empties_the_log() {
    let dir = tempdir().unwrap();
    for spoken in ["thank you", "thank you very much"] {
        pronunciation()
            .args(["score", "--spoken", spoken, "--target", "Thank you very much."])
            .arg("--data-dir")
            .arg(dir.path())
            .assert()
            .success();
    }
    pronunciation()
        .args(["history", "--clear", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 practice attempts"));
    pronunciation()
        .args(["history", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No practice attempts recorded yet"));
}

#[test]
fn targets_lists_builtin_sentences() {
    pronunciation()
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nice to meet you."))
        .stdout(predicate::str::contains("I'm sorry, I don't understand."));
}

#[test]
fn offline_translation_is_recorded() {
    let dir = tempdir().unwrap();
    echolingo()
        .args(["translate", "감사합니다", "--offline", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("English: Thank you (offline)"));

    echolingo()
        .args(["history", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("한국어: 감사합니다 | English: Thank you"));
}

#[test]
fn round_trip_translates_back() {
    echolingo()
        .args([
            "translate",
            "hello there",
            "--from",
            "en",
            "--to",
            "ko",
            "--offline",
            "--round-trip",
            "--no-history",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("한국어: 안녕하세요 (offline)"))
        .stdout(predicate::str::contains("English: Hello (offline)"));
}

#[test]
fn same_language_translation_fails() {
    echolingo()
        .args(["translate", "hello", "--from", "en", "--to", "en", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid translation request"));
}

#[test]
fn samples_lists_mode_sentences() {
    echolingo()
        .args(["samples", "business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("일정을 조정할 수 있나요? -> Can we reschedule?"));
}
