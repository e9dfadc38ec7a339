use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const HEADER: &str = "Grade,Section,Class #,Date,Weekday,Day,Description,Material,Summary";

#[allow(deprecated)]
fn generator(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("generate-schedule-data").expect("generator binary");
    cmd.current_dir(root)
        .env_remove("SCHEDULE_DATA_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_input(root: &Path, body: &str) {
    let input = root.join("teacher/authoring/schedule.csv");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(input, body).unwrap();
}

#[test]
fn bare_invocation_generates_default_output() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), &format!("{HEADER}\n1,A,1,3/1/2024,Fri,1,D,M,S\n"));

    generator(dir.path())
        .assert()
        .success()
        .stdout("schedule-data.js successfully generated.\n");

    let output = dir.path().join("teacher/assets/js/schedule-data.js");
    let content = fs::read_to_string(output).unwrap();
    assert!(content.starts_with("// AUTO-GENERATED FILE\n"));
    assert!(content.contains("window.SCHEDULE_DATA = ["));
}

#[test]
fn validation_failure_exits_with_one() {
    let dir = tempdir().unwrap();
    write_input(
        dir.path(),
        "Grade,Section,Class #,Date,Weekday,Day,Description,Material\n",
    );

    generator(dir.path())
        .assert()
        .code(1)
        .stdout("Error: Missing required columns: Summary\n");

    assert!(!dir.path().join("teacher/assets").exists());
}

#[test]
fn invalid_grade_is_reported_with_row() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), &format!("{HEADER}\nten,A,1,3/1/2024,Fri,1,D,M,S\n"));

    generator(dir.path())
        .assert()
        .code(1)
        .stdout(str_contains("Invalid Grade at row 2: 'ten'"));
}

#[test]
fn empty_input_reports_missing_header() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), "");

    generator(dir.path())
        .assert()
        .code(1)
        .stdout("Error: CSV file is empty or missing a header row.\n");
}

#[test]
fn missing_input_file_fails_without_validation_code() {
    let dir = tempdir().unwrap();

    generator(dir.path())
        .assert()
        .code(2)
        .stdout(str_contains("Error: io error"));
}

#[test]
fn root_and_output_flags_override_layout() {
    let project = tempdir().unwrap();
    write_input(project.path(), &format!("{HEADER}\n1,A,1,3/1/2024,Fri,1,D,M,S\n"));
    let elsewhere = tempdir().unwrap();

    generator(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .args(["--output", "build/classes.js", "--global-name", "window.CLASSES"])
        .assert()
        .success()
        .stdout(str_contains("classes.js successfully generated."));

    let content = fs::read_to_string(project.path().join("build/classes.js")).unwrap();
    assert!(content.contains("window.CLASSES = ["));
}
