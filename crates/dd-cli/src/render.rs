//! Terminal rendering of a session.

use chrono::NaiveDateTime;
use colored::Colorize;

use dd_core::results::DATE_FORMAT;
use dd_core::{GameSettings, RoundOutcome, RoundResult, SessionObserver, SessionReport, Verdict};

const RULE_WIDTH: usize = 50;

/// Prints each round as it is played.
pub struct TerminalObserver<'a> {
    settings: &'a GameSettings,
}

impl<'a> TerminalObserver<'a> {
    pub fn new(settings: &'a GameSettings) -> Self {
        Self { settings }
    }
}

impl SessionObserver for TerminalObserver<'_> {
    fn round_started(&mut self, round: u32, _total: u32) {
        println!("{}", format!("Round {round}:").bold());
    }

    fn rolled(&mut self, _round: u32, outcome: &RoundOutcome) {
        println!("You rolled:");
        println!("{}", self.settings.dice_glyph(outcome.player_roll));
        println!("Computer rolled:");
        println!("{}", self.settings.dice_glyph(outcome.computer_roll));
    }

    fn round_tied(&mut self, _round: u32) {
        println!("{}", "It's a tie! Roll again.".yellow());
    }

    fn round_scored(&mut self, _round: u32, outcome: &RoundOutcome, score: i64) {
        match outcome.result() {
            RoundResult::PlayerWins => {
                println!("{}", "You win!".green());
                println!("You got +{} points.", outcome.delta);
            }
            RoundResult::OpponentWins => {
                println!("{}", "You lose!".red());
                println!("You lost {} points.", outcome.delta.abs());
            }
            RoundResult::Tie => {}
        }
        println!("Current score: {score}");
        println!();
    }
}

/// Banner printed once setup is complete.
pub fn game_info(player: &str, rounds: u32, started_at: NaiveDateTime) {
    println!("Let's start the game!");
    println!("Player: {player}");
    println!("Level: {rounds} rounds");
    println!("Time started: {}", started_at.format(DATE_FORMAT));
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// Final results screen.
pub fn final_results(report: &SessionReport) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{rule}");
    println!("{}", "Game over!".bold());
    println!("{rule}");
    println!("Start time: {}", report.started_at.format(DATE_FORMAT));
    println!("End time: {}", report.ended_at.format(DATE_FORMAT));
    println!("Player: {}", report.summary.player_name);
    match &report.level_label {
        Some(label) => println!("Level: {label}"),
        None => println!("Level: {} rounds", report.summary.round_count),
    }
    println!("Final score: {:+}", report.summary.final_score);
    match report.verdict {
        Verdict::Win => println!("{}", "You won the game!".green().bold()),
        Verdict::Loss => println!("{}", "You lost the game!".red().bold()),
        Verdict::Tie => println!("{}", "It's a tie!".yellow().bold()),
    }
    println!("{rule}");
    println!();
}
