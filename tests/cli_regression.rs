// CLI regression tests: results on stdout, miette diagnostics on stderr, distinct exit codes.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn graphrts() -> Command {
    let mut cmd = Command::cargo_bin("graphrts").unwrap();
    cmd.env_remove("GRAPHRTS_LOG");
    cmd
}

#[test]
fn apply_prints_result() {
    graphrts()
        .args(["apply", "leq_integer", "3", "5"])
        .assert()
        .success()
        .stdout(contains("true"));
    graphrts()
        .args(["apply", "leq_integer", "5", "3"])
        .assert()
        .success()
        .stdout(contains("false"));
}

#[test]
fn negative_literals_are_arguments_not_flags() {
    graphrts()
        .args(["apply", "less_integer", "-4", "-3"])
        .assert()
        .success()
        .stdout(contains("true"));
}

#[test]
fn partial_application_prints_the_closure() {
    graphrts()
        .args(["apply", "leq_integer", "3"])
        .assert()
        .success()
        .stdout(contains("<builtin leq_integer 3 ..1>"));
}

#[test]
fn un_list_data_unwraps() {
    graphrts()
        .args(["apply", "un_list_data", "list:42"])
        .assert()
        .success()
        .stdout(contains("42"));
}

#[test]
fn type_error_exits_with_code_1() {
    graphrts()
        .args(["apply", "leq_integer", "true", "1"])
        .assert()
        .code(1)
        .stderr(contains("graphrts::type_error"));
}

#[test]
fn diverge_exits_with_code_2() {
    graphrts()
        .args(["apply", "un_list_data", "constr:0:1"])
        .assert()
        .code(2)
        .stderr(contains("graphrts::diverge"));
}

#[test]
fn unknown_builtin_and_bad_literal() {
    graphrts()
        .args(["apply", "leq_int", "1"])
        .assert()
        .code(3)
        .stderr(contains("did you mean").and(contains("leq_integer")));
    graphrts()
        .args(["apply", "leq_integer", "three"])
        .assert()
        .code(64)
        .stderr(contains("graphrts::parse"));
}

#[test]
fn config_file_sets_the_budget() {
    let config = std::env::temp_dir().join(format!("graphrts_budget_{}.yaml", std::process::id()));
    fs::write(&config, "max_steps: 1\n").unwrap();
    let config_arg = config.to_str().unwrap();

    let exhausted = graphrts()
        .args(["--config", config_arg, "apply", "leq_integer", "1", "2"])
        .assert();
    // The command-line override wins over the file.
    let overridden = graphrts()
        .args(["--config", config_arg, "--max-steps", "5", "apply", "leq_integer", "1", "2"])
        .assert();
    let _ = fs::remove_file(&config);

    exhausted.code(3).stderr(contains("budget"));
    overridden.success();
}

#[test]
fn deeply_nested_literals_exit_cleanly() {
    let deep = format!("{}1", "list:".repeat(3000));
    graphrts()
        .args(["apply", "un_list_data", &deep])
        .assert()
        .success()
        .stdout(contains("(list (list ").and(contains("1))")));
    graphrts()
        .args(["apply", "leq_integer", "1", &deep])
        .assert()
        .code(1)
        .stderr(contains("graphrts::type_error"));
    let unterminated = format!("{}x", "list:".repeat(3000));
    graphrts()
        .args(["apply", "list_data", &unterminated])
        .assert()
        .code(64)
        .stderr(contains("graphrts::parse"));
}

#[test]
fn builtins_lists_every_name() {
    graphrts().arg("builtins").assert().success().stdout(
        contains("leq_integer")
            .and(contains("un_list_data"))
            .and(contains("list_data"))
            .and(contains("/2")),
    );
}
