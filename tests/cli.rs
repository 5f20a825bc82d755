//! End-to-end tests of the `mazesearch` binary.

#![expect(
    unused_crate_dependencies,
    reason = "Integration tests only drive the binary through assert_cmd."
)]

use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt as _};

/// Builds a command for the binary, run from the crate root so fixture paths resolve.
fn mazesearch() -> Command {
    let mut cmd = Command::cargo_bin("mazesearch").expect("binary should be built");
    let _ = cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn solve_default_maze() {
    let _ = mazesearch()
        .arg("solve")
        .assert()
        .success()
        .stdout(str::starts_with("found path of 34 steps\n(1, 1)\n"));
}

#[test]
fn solve_fixture_as_grid() {
    let _ = mazesearch()
        .args(["solve", "mazes/detour.labmap", "--format", "grid"])
        .assert()
        .success()
        .stdout("found path of 6 steps\nS**\n##*\nG**\n");
}

#[test]
fn solve_unreachable_fixture_exits_with_two() {
    let _ = mazesearch()
        .args(["solve", "mazes/walled.labmap"])
        .assert()
        .code(2)
        .stdout("goal unreachable\n");
}

#[test]
fn solve_with_exhausted_budget_exits_with_three() {
    let _ = mazesearch()
        .args(["solve", "--max-expansions", "0"])
        .assert()
        .code(3)
        .stdout("search cancelled\n");
}

#[test]
fn solve_invalid_fixture_reports_symbol() {
    let _ = mazesearch()
        .args(["solve", "mazes/broken.labmap"])
        .assert()
        .failure()
        .stderr(str::contains("invalid symbol 'x' at row 1, column 1"));
}

#[test]
fn list_fixture_directory() {
    let _ = mazesearch()
        .args(["list", "mazes"])
        .assert()
        .success()
        .stdout(str::contains("corridor 5x3 (1, 1) -> (4, 1)"))
        .stdout(str::contains("broken").not());
}

#[test]
fn verbose_solve_logs_to_stderr() {
    let _ = mazesearch()
        .args(["-vv", "solve", "mazes/corridor.labmap"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(str::starts_with("found path of 3 steps"))
        .stderr(str::contains("found path of 3 steps after"));
}
