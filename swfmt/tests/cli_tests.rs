//! Integration tests driving the swfmt binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn swfmt() -> Command {
    let mut cmd = Command::cargo_bin("swfmt").unwrap();
    // keep test runs isolated from any user-level fingerprint cache
    cmd.arg("--no-cache");
    cmd
}

#[test]
fn formats_stdin_to_stdout() {
    swfmt()
        .write_stdin("func foo()\n{\nbar()\n}")
        .assert()
        .success()
        .stdout("func foo() {\n    bar()\n}\n");
}

#[test]
fn stdin_parsing_error_fails() {
    swfmt()
        .write_stdin("func foo() {")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing"));
}

#[test]
fn fragment_flag_accepts_dangling_input() {
    swfmt()
        .arg("--fragment")
        .write_stdin("if x {\ny()")
        .assert()
        .success()
        .stdout("if x {\n    y()");
}

#[test]
fn rewrites_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("main.swift");
    std::fs::write(&file, "let x  = 1;\n").unwrap();

    swfmt().arg(&file).assert().success();

    let contents = std::fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "let x = 1\n");
}

#[test]
fn check_mode_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("main.swift");
    let original = "let x  = 1\n";
    std::fs::write(&file, original).unwrap();

    swfmt()
        .arg("--check")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would reformat"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn check_mode_passes_on_formatted_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("main.swift");
    std::fs::write(&file, "let x = 1\n").unwrap();

    swfmt().arg("--check").arg(&file).assert().success();
}

#[test]
fn directories_are_walked_for_swift_files() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("Sources").join("App");
    std::fs::create_dir_all(&nested).unwrap();
    let swift = nested.join("a.swift");
    std::fs::write(&swift, "let a  = 1\n").unwrap();
    let other = nested.join("notes.txt");
    std::fs::write(&other, "not  touched\n").unwrap();

    swfmt().arg(dir.path()).assert().success();

    assert_eq!(std::fs::read_to_string(&swift).unwrap(), "let a = 1\n");
    assert_eq!(std::fs::read_to_string(&other).unwrap(), "not  touched\n");
}

#[test]
fn config_file_controls_indentation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("swfmt.toml"), "indent_width = 2\n").unwrap();
    let file = dir.path().join("main.swift");
    std::fs::write(&file, "func f() {\ng()\n}\n").unwrap();

    swfmt().arg(&file).assert().success();

    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "func f() {\n  g()\n}\n"
    );
}

#[test]
fn broken_file_reports_error_and_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.swift");
    std::fs::write(&file, "func foo() {\n").unwrap();

    swfmt()
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parsing"));
}
