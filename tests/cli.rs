use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_input(dir: &Path, name: &str, content: &str) {
    let inputs = dir.join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join(name), content).unwrap();
}

fn textmorph(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("textmorph").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn reverse_writes_reversed_output() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "hello.txt", "Hello, World!");

    textmorph(temp.path())
        .args(["--filename", "hello.txt", "--reverse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reverse"));

    let out = temp.path().join("outputs").join("hello_processed.txt");
    assert_eq!(fs::read_to_string(out).unwrap(), "!dlroW ,olleH");
}

#[test]
fn no_flags_copies_verbatim_with_warning() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "hello.txt", "Hello, World!");

    textmorph(temp.path())
        .args(["-f", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No processing options selected"));

    let out = temp.path().join("outputs").join("hello_processed.txt");
    assert_eq!(fs::read_to_string(out).unwrap(), "Hello, World!");
}

#[test]
fn missing_input_fails_with_message_and_no_output() {
    let temp = tempfile::tempdir().unwrap();

    textmorph(temp.path())
        .args(["-f", "ghost.txt", "-r"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"));

    assert!(!temp.path().join("outputs").exists());
}

#[test]
fn seeded_randomize_case_is_reproducible() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "hello.txt", "Hello, World!");
    let out = temp.path().join("outputs").join("hello_processed.txt");

    textmorph(temp.path())
        .args(["-f", "hello.txt", "-u", "--seed", "42"])
        .assert()
        .success();
    let first = fs::read_to_string(&out).unwrap();

    textmorph(temp.path())
        .args(["-f", "hello.txt", "-u", "--seed", "42"])
        .assert()
        .success();
    let second = fs::read_to_string(&out).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_lowercase(), "hello, world!");
}

#[test]
fn randomize_case_leaves_punctuation_alone() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "sym.txt", "a! b? c.");

    textmorph(temp.path())
        .args(["-f", "sym.txt", "-u"])
        .assert()
        .success();

    let out = fs::read_to_string(temp.path().join("outputs").join("sym_processed.txt")).unwrap();
    assert_eq!(out.to_lowercase(), "a! b? c.");
}

#[test]
fn multi_dot_name_keeps_preceding_dots() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "a.b.txt", "content");

    textmorph(temp.path())
        .args(["-f", "a.b.txt", "-r"])
        .assert()
        .success();

    let out = temp.path().join("outputs").join("a.b_processed.txt");
    assert_eq!(fs::read_to_string(out).unwrap(), "tnetnoc");
}

#[test]
fn uppercase_and_reverse_compose() {
    let temp = tempfile::tempdir().unwrap();
    write_input(temp.path(), "both.txt", "ab cd");

    textmorph(temp.path())
        .args(["-f", "both.txt", "-u", "-r", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("random uppercase"))
        .stdout(predicate::str::contains("reverse"));

    let out = fs::read_to_string(temp.path().join("outputs").join("both_processed.txt")).unwrap();
    assert_eq!(out.to_lowercase(), "dc ba");
}

#[test]
fn filename_is_required() {
    let temp = tempfile::tempdir().unwrap();
    textmorph(temp.path())
        .arg("--reverse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--filename"));
}
