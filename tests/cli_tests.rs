//! Integration tests for the manager-report binary

use assert_cmd::Command;
use manager_report::DEFAULT_REPORT_FILES;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "First Name,Last Name,Email,Sent Date (UTC),Title,Status,Quiz Score,Clicked,Manager First Name,Manager Last Name,Manager Email";

fn seed_reports(dir: &std::path::Path) {
    for name in DEFAULT_REPORT_FILES {
        fs::write(dir.join(name), format!("{}\n", HEADER)).unwrap();
    }
    fs::write(
        dir.join("LowScoringUsers.csv"),
        format!(
            "{}\nJane,Doe,jane@x.com,2024-01-01,Analyst,Completed,80,Yes,Bob,Mgr,bob@x.com\n",
            HEADER
        ),
    )
    .unwrap();
}

fn manager_report() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("manager-report"))
}

#[test]
fn test_cli_requires_two_arguments() {
    let mut cmd = manager_report();
    cmd.arg("bob@x.com");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("OUTPUT_FILE"));
}

#[test]
fn test_cli_writes_report_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    seed_reports(temp_dir.path());

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["bob@x.com", "out.csv"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report generated: out.csv"));

    let content = fs::read_to_string(temp_dir.path().join("out.csv")).unwrap();
    assert!(content.contains(
        "LowScoringUsers,Jane,Doe,jane@x.com,2024-01-01,Analyst,Completed,80,Yes,Bob,Mgr,bob@x.com"
    ));
}

#[test]
fn test_cli_reads_from_input_dir() {
    let temp_dir = TempDir::new().unwrap();
    let reports = temp_dir.path().join("exports");
    fs::create_dir(&reports).unwrap();
    seed_reports(&reports);

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .args(["bob@x.com", "out.csv", "--input-dir", "exports"]);
    cmd.assert().success();

    assert!(temp_dir.path().join("out.csv").exists());
}

#[test]
fn test_cli_fails_when_reports_are_missing() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path()).args(["bob@x.com", "out.csv"]);
    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Could not access a file"));

    assert!(!temp_dir.path().join("out.csv").exists());
}

#[test]
fn test_cli_fails_when_output_directory_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    seed_reports(temp_dir.path());

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .args(["bob@x.com", "missing/dir/out.csv"]);
    cmd.assert().failure();
}

#[test]
fn test_cli_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("scores.csv"),
        format!(
            "{}\nAmy,Roe,amy@x.com,2024-05-01,Dev,Completed,35,No,Bob,Mgr,bob@x.com\n",
            HEADER
        ),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("reports.toml"),
        "[[reports]]\nfile = \"scores.csv\"\nreport_type = \"LowScoringUsers\"\n",
    )
    .unwrap();

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .args(["bob@x.com", "out.csv", "--config", "reports.toml"]);
    cmd.assert().success();

    let content = fs::read_to_string(temp_dir.path().join("out.csv")).unwrap();
    assert!(content.contains("LowScoringUsers,Amy,Roe"));
}

#[test]
fn test_cli_missing_required_column_exits_with_code_one() {
    let temp_dir = TempDir::new().unwrap();
    seed_reports(temp_dir.path());
    fs::write(
        temp_dir.path().join("UserPhishingFailures.csv"),
        "First Name,Last Name,Email,Sent Date (UTC),Manager First Name,Manager Last Name,Manager Email\n\
         Eve,Poe,eve@x.com,2024-03-01,Bob,Mgr,bob@x.com\n",
    )
    .unwrap();

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path()).args(["bob@x.com", "out.csv"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'Title'"));

    assert!(!temp_dir.path().join("out.csv").exists());
}

#[test]
fn test_cli_json_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    seed_reports(temp_dir.path());

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["bob@x.com", "out.csv", "--log-json", "-v"]);
    cmd.assert()
        .success()
        .stdout("Report generated: out.csv\n")
        .stderr(predicate::str::contains("\"level\":\"INFO\""))
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""))
        .stderr(predicate::str::contains("Matched row for manager"));
}

#[test]
fn test_cli_ignores_extra_arguments() {
    let temp_dir = TempDir::new().unwrap();
    seed_reports(temp_dir.path());

    let mut cmd = manager_report();
    cmd.current_dir(temp_dir.path())
        .args(["bob@x.com", "out.csv", "extra"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report generated: out.csv"));

    assert!(temp_dir.path().join("out.csv").exists());
}
