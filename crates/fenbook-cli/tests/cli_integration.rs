use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const EMPTY_BOARD: &str = "8/8/8/8/8/8/8/8 w - - 0 1";
const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn fenbook() -> Command {
    Command::cargo_bin("fenbook").unwrap()
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

mod validate_tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_entries() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("diagrams.txt");
        fs::write(&file, format!("{START} // starting position\n{EMPTY_BOARD}\n")).unwrap();

        let output = fenbook()
            .args(["validate", file.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["total"], 2);
        assert_eq!(json["data"]["valid"], 2);
        assert_eq!(json["data"]["entries"][0]["description"], "starting position");
    }

    #[test]
    fn test_validate_rejects_malformed_fen() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("diagrams.txt");
        fs::write(&file, format!("{START}\nnot a position // oops\n")).unwrap();

        fenbook()
            .args(["validate", file.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("1 of 2 entries failed validation"));
    }

    #[test]
    fn test_validate_reports_per_entry_errors_on_failure() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("diagrams.txt");
        fs::write(&file, "8/8/8/8/8/8/8/9 w - - 0 1\n").unwrap();

        let output = fenbook()
            .args(["validate", file.to_str().unwrap()])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert!(!json["success"].as_bool().unwrap());
        assert!(json["data"]["entries"][0]["error"].is_string());
    }

    #[test]
    fn test_validate_missing_file_fails() {
        fenbook()
            .args(["validate", "/no/such/file.txt"])
            .assert()
            .failure();
    }
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_generate_with_no_renderable_entries_fails_before_any_request() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("diagrams.txt");
        fs::write(&file, "\n\n").unwrap();

        fenbook()
            .args([
                "--site",
                "http://127.0.0.1:9",
                "generate",
                file.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn test_generate_against_unreachable_service_reports_transport_failure() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("diagrams.txt");
        fs::write(&file, format!("{START} // opening\n")).unwrap();
        let out = dir.path().join("book.pdf");

        fenbook()
            .args([
                "--site",
                "http://127.0.0.1:9",
                "generate",
                file.to_str().unwrap(),
                "--output",
                out.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "No response from the rendering service",
            ));
        assert!(!out.exists());
    }
}

#[test]
fn test_completions_generate_for_bash() {
    fenbook()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fenbook"));
}
