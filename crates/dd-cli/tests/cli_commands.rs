//! Integration tests for the dd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Enough Enter presses to get through any game, ties included.
fn presses(n: usize) -> String {
    "\n".repeat(n)
}

fn results_path(dir: &TempDir) -> PathBuf {
    dir.path().join("results.json")
}

fn duel(results: &Path) -> Command {
    let mut cmd = Command::cargo_bin("duel").unwrap();
    cmd.args(["--no-pause", "--results-file", results.to_str().unwrap()]);
    cmd
}

fn read_log(path: &Path) -> Vec<serde_json::Value> {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn final_score_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find(|l| l.starts_with("Final score:"))
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("duel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play").and(predicate::str::contains("results")));
}

// ---------------------------------------------------------------------------
// menu
// ---------------------------------------------------------------------------

#[test]
fn menu_quit() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to the game Dice!")
                .and(predicate::str::contains("Press 2 to view results."))
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn menu_rejects_unknown_choice() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .write_stdin("9\nplay\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1, 2, or 3.").count(2));
}

#[test]
fn menu_quits_when_input_closes() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn menu_view_results_without_history() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no saved results."));
}

#[test]
fn menu_plays_a_game_and_returns() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    let input = format!("1\nAda\n1\n{}", presses(200));

    duel(&results)
        .args(["--seed", "11"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game over!")
                .and(predicate::str::contains("Thanks for playing!")),
        );

    let log = read_log(&results);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["Player"], "Ada");
    assert_eq!(log[0]["Number of rounds"], 5);
}

#[test]
fn menu_survives_input_closing_mid_game() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    duel(&results)
        .write_stdin("1\nAda\n1\n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error during game")
                .and(predicate::str::contains("Thanks for playing!")),
        );

    assert!(!results.exists());
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_with_flags_records_result() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    duel(&results)
        .args(["--seed", "42", "play", "--name", "Ada", "--level", "1"])
        .write_stdin(presses(200))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Let's start the game!")
                .and(predicate::str::contains("Round 1:"))
                .and(predicate::str::contains("Round 5:"))
                .and(predicate::str::contains("Round 6:").not())
                .and(predicate::str::contains(" of 5:").not())
                .and(predicate::str::contains("Computer rolled:"))
                .and(predicate::str::contains("Game over!"))
                .and(predicate::str::contains("Player: Ada"))
                .and(predicate::str::contains("Level: Short")),
        );

    let log = read_log(&results);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["Player"], "Ada");
    assert_eq!(log[0]["Number of rounds"], 5);
    assert!(log[0]["Total score"].is_i64());
    assert_eq!(log[0]["Date"].as_str().unwrap().len(), "2024-01-01 00:00:00".len());
}

#[test]
fn play_prompts_until_input_is_valid() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    let input = format!("\n   \nGrace\n7\n2\n{}", presses(300));

    duel(&results)
        .args(["--seed", "3", "play"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Name cannot be empty.")
                .count(2)
                .and(predicate::str::contains("Wrong choice. Please enter 1, 2, 3."))
                .and(predicate::str::contains("2. Medium game (8 rounds)"))
                .and(predicate::str::contains("Level: Medium")),
        );

    let log = read_log(&results);
    assert_eq!(log[0]["Player"], "Grace");
    assert_eq!(log[0]["Number of rounds"], 8);
}

#[test]
fn play_waits_for_an_empty_line() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    let input = format!("roll!\n{}", presses(200));

    duel(&results)
        .args(["--seed", "5", "play", "--name", "Ada", "--level", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please press Enter to roll the dice.").count(1));
}

#[test]
fn play_appends_to_existing_history() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    for (name, level) in [("Ada", "1"), ("Grace", "3")] {
        duel(&results)
            .args(["play", "--name", name, "--level", level])
            .write_stdin(presses(300))
            .assert()
            .success();
    }

    let log = read_log(&results);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0]["Player"], "Ada");
    assert_eq!(log[1]["Player"], "Grace");
    assert_eq!(log[1]["Number of rounds"], 10);
}

#[test]
fn play_is_reproducible_with_a_seed() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    let run = || {
        duel(&results)
            .args(["--seed", "1234", "play", "--name", "Ada", "--level", "2"])
            .write_stdin(presses(300))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(final_score_line(&run()), final_score_line(&run()));
}

#[test]
fn play_fails_when_input_closes() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    duel(&results)
        .args(["play", "--name", "Ada", "--level", "1"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error rolling dice: input closed"));

    assert!(!results.exists());
}

#[test]
fn play_rejects_empty_name_flag() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .args(["play", "--name", "   ", "--level", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn play_rejects_unknown_level_flag() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .args(["play", "--name", "Ada", "--level", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown level '9'"));
}

#[cfg(unix)]
#[test]
fn interrupt_stops_game_without_saving() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};

    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);

    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_duel"))
        .args(["--no-pause", "--results-file", results.to_str().unwrap()])
        .args(["play", "--name", "Ada", "--level", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // Wait for the first roll prompt so the handler is installed and the
    // game is blocked on input.
    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Press Enter to roll the dice") {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "game ended before prompting");
        seen.extend_from_slice(&buf[..n]);
    }

    let killed = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();

    assert!(!status.success());
    assert_eq!(status.code(), Some(130));
    assert!(String::from_utf8_lossy(&seen).contains("Game interrupted."));
    assert!(!results.exists());
}

// ---------------------------------------------------------------------------
// results
// ---------------------------------------------------------------------------

#[test]
fn results_without_history() {
    let dir = TempDir::new().unwrap();
    duel(&results_path(&dir))
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no saved results."));
}

#[test]
fn results_shows_history_in_order() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    fs::write(
        &results,
        r#"[
  {"Date": "2024-03-09 14:05:07", "Player": "Ada", "Number of rounds": 3, "Total score": 3},
  {"Date": "2024-03-10 09:00:00", "Player": "Grace", "Number of rounds": 8, "Total score": -4}
]"#,
    )
    .unwrap();

    let output = duel(&results)
        .arg("results")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Results of previous games:")
                .and(predicate::str::contains("2024-03-09 14:05:07"))
                .and(predicate::str::contains("+3"))
                .and(predicate::str::contains("-4"))
                .and(predicate::str::contains("2 games")),
        )
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let ada = text.find("Ada").unwrap();
    let grace = text.find("Grace").unwrap();
    assert!(ada < grace);
}

#[test]
fn results_footer_uses_singular_for_one_game() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    fs::write(
        &results,
        r#"[{"Date": "2024-03-09 14:05:07", "Player": "Ada", "Number of rounds": 5, "Total score": 2}]"#,
    )
    .unwrap();

    duel(&results)
        .arg("results")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 game\n")
                .and(predicate::str::contains("1 games").not()),
        );
}

#[test]
fn results_treats_non_utf8_history_as_empty() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    fs::write(&results, [0xff, 0xfe, b'[', 0x80]).unwrap();

    duel(&results)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no saved results."));
}

#[test]
fn results_treats_corrupt_history_as_empty() {
    let dir = TempDir::new().unwrap();
    let results = results_path(&dir);
    fs::write(&results, "{ this is not json").unwrap();

    duel(&results)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no saved results."));
}
