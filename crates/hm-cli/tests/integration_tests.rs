//! Integration tests for the hm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hm() -> Command {
    Command::cargo_bin("hm").unwrap()
}

#[test]
fn test_cli_help() {
    hm().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hindley-Milner"));
}

#[test]
fn test_cli_version() {
    hm().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_infer_inline_expression() {
    hm().args(["infer", "-e", "(lambda (x) x)"])
        .assert()
        .success()
        .stdout("(lambda (x) x) => (a -> a)\n");
}

#[test]
fn test_infer_aligns_multiple_expressions() {
    hm().args(["infer", "-e", "5", "-e", "(pair 6)"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{:<8} => int", "5")))
        .stdout(predicate::str::contains("(pair 6) => (a -> (int * a))"));
}

#[test]
fn test_infer_file_reports_each_expression() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("exprs.scm");
    fs::write(
        &path,
        "; identity\n(lambda (f) f)\n(lambda (f) (f f))\n(tl (cons 5 nil))\n",
    )
    .unwrap();

    hm().arg("infer")
        .arg(&path)
        .arg("--no-align")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(lambda (f) f) => (a -> a)"))
        .stdout(predicate::str::contains(
            "(lambda (f) (f f)) => error: recursive unification",
        ))
        .stdout(predicate::str::contains("(tl (cons 5 nil)) => (list int)"))
        .stderr(predicate::str::contains("1 of 3 expressions failed"));
}

#[test]
fn test_infer_reads_stdin() {
    hm().arg("infer")
        .write_stdin("(succ 1)\n(zero 0)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(succ 1) => int"))
        .stdout(predicate::str::contains("(zero 0) => bool"));
}

#[test]
fn test_infer_json_output() {
    hm().args(["infer", "--format", "json", "-e", "(car (pair 1 #t))"])
        .assert()
        .success()
        .stdout("{\"expr\":\"(car (pair 1 #t))\",\"type\":\"int\",\"error\":null}\n");
}

#[test]
fn test_unbound_symbol_fails() {
    hm().args(["infer", "-e", "(frob 1)"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown symbol 'frob'"));
}

#[test]
fn test_syntax_error_is_reported() {
    hm().args(["infer", "-e", "(pair 1 \"open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated string literal"));
}

#[test]
fn test_syntax_error_keeps_other_results() {
    hm().args(["infer", "-e", "(succ 1)", "-e", "(pair 1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(succ 1)"))
        .stdout(predicate::str::contains("=> int"))
        .stdout(predicate::str::contains("<expr #2>"))
        .stderr(predicate::str::contains("unexpected end of input"))
        .stderr(predicate::str::contains("1 of 2 expressions failed"));
}

#[test]
fn test_parse_prints_ast() {
    hm().args(["parse", "--compact", "-e", "(succ 1)"])
        .assert()
        .success()
        .stdout(
            "{\"kind\":\"list\",\"value\":[{\"kind\":\"symbol\",\"value\":\"succ\"},{\"kind\":\"integer\",\"value\":1}]}\n",
        );
}

#[test]
fn test_demo_runs_samples() {
    hm().arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("=> (either bool int)"))
        .stdout(predicate::str::contains("=> ((list a) -> int)"))
        .stdout(predicate::str::contains("error: recursive unification"));
}

#[test]
fn test_config_file_selects_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("hm.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    hm().arg("--config")
        .arg(&config)
        .args(["infer", "-e", "#t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"bool\""));
}

#[test]
fn test_local_config_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hm.toml"), "[output]\nalign = false\nformat = \"json\"\n").unwrap();

    hm().arg("-C")
        .arg(temp_dir.path())
        .args(["infer", "-e", "#f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"bool\""));
}

#[test]
fn test_bad_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("hm.toml");
    fs::write(&config, "[output\n").unwrap();

    hm().arg("--config")
        .arg(&config)
        .args(["infer", "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"))
        .stderr(predicate::str::contains("Config(").not());
}

#[test]
fn test_missing_directory_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    hm().arg("-C")
        .arg(temp_dir.path().join("absent"))
        .args(["infer", "-e", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"))
        .stderr(predicate::str::contains("Io(").not());
}
