//! End-to-end tests for the digitmind binary
//!
//! Drives the classic game through stdin and checks the non-interactive
//! commands' output.

use assert_cmd::{Command, cargo};
use predicates::prelude::*;

/// Helper to create a digitmind command
fn digitmind() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("digitmind"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// =============================================================================
// CLASSIC GAME
// =============================================================================

#[test]
fn test_quit_from_menu() {
    digitmind()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-- Welcome to DigitMind --"))
        .stdout(predicate::str::contains("Choose game mode:"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    digitmind()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_computer_guesses_first_try() {
    digitmind()
        .args(["--strategy", "first", "play"])
        .write_stdin("1\n7\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter the difficulty level (from 4 to 10): "))
        .stdout(predicate::str::contains("Computer's guess: 0123"))
        .stdout(predicate::str::contains("The computer has guessed your combination!"));
}

#[test]
fn test_invalid_level_reprompts() {
    digitmind()
        .args(["--strategy", "first"])
        .write_stdin("1\n2\nten\n4\n4\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter a number between 4 and 10: ")
                .count(2),
        );
}

#[test]
fn test_inconsistent_scores_restart_game() {
    digitmind()
        .args(["--level", "4", "--strategy", "first"])
        .write_stdin("1\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input error detected, restarting game..."))
        .stdout(predicate::str::contains("Choose game mode:").count(2));
}

#[test]
fn test_human_gives_up() {
    digitmind()
        .args(["--level", "6", "--seed", "3"])
        .write_stdin("2\n0129\n0123\nq\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid guess: digit 9 is out of range (0 to 5)"))
        .stdout(predicate::str::contains("Digits in the right position: "))
        .stdout(predicate::str::contains("The combination was "));
}

// =============================================================================
// SOLVE / BENCHMARK
// =============================================================================

#[test]
fn test_solve_reports_success() {
    digitmind()
        .args(["--seed", "1", "solve", "7405", "--details", "--max-guesses", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solving: 7405"))
        .stdout(predicate::str::contains("Candidates: 5040 →"))
        .stdout(predicate::str::contains("Solved in"));
}

#[test]
fn test_solve_rejects_invalid_secret() {
    digitmind()
        .args(["--level", "5", "solve", "0156"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_invalid_level_flag_rejected() {
    digitmind()
        .args(["--level", "11", "solve", "0123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("level must be between 4 and 10"));
}

#[test]
fn test_benchmark_small_level() {
    digitmind()
        .args(["--level", "4", "--seed", "8", "benchmark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running benchmark on level 4 (24 combinations)"))
        .stdout(predicate::str::contains("Games played:     24"))
        .stdout(predicate::str::contains("24/24"));
}

#[test]
fn test_max_guesses_flag_bounds_benchmark() {
    digitmind()
        .args(["--level", "6", "--strategy", "first", "--max-guesses", "1"])
        .args(["benchmark", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/10"))
        .stdout(predicate::str::contains("Unsolved:         9"));
}

#[test]
fn test_max_guesses_flag_bounds_solve() {
    digitmind()
        .args(["--strategy", "first", "solve", "9876", "--max-guesses", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solving: 9876"))
        .stdout(predicate::str::contains("Failed to solve in 1 guesses"));
}
