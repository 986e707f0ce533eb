//! Session management.
//!
//! A session moves through `Setup → Playing → Finished` exactly once.
//! [`SessionSetup`] collects the player name and the game length;
//! [`SessionSetup::start`] hands back a [`SessionEngine`] that plays the
//! rounds and finally writes a [`SessionSummary`] to the [`ResultStore`].

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::config::GameSettings;
use crate::contestant::{Contestant, Roller};
use crate::error::{DiceError, DiceResult};
use crate::results::{ResultStore, SessionSummary};
use crate::round::{RoundOutcome, resolve};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting the player name and round count.
    Setup,
    /// Rounds are being played.
    Playing,
    /// All rounds played and the result handed to the store.
    Finished,
}

/// How the session ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Final score above zero.
    Win,
    /// Final score below zero.
    Loss,
    /// Final score of exactly zero.
    Tie,
}

impl Verdict {
    /// Classify a final score.
    pub fn from_score(score: i64) -> Self {
        match score {
            1.. => Self::Win,
            0 => Self::Tie,
            _ => Self::Loss,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// Receives progress while rounds are played. Every method defaults to
/// doing nothing.
pub trait SessionObserver {
    /// An attempt at `round` (1-based, out of `total`) is about to roll.
    /// Fires again with the same index after a tie.
    fn round_started(&mut self, _round: u32, _total: u32) {}

    /// Both contestants rolled.
    fn rolled(&mut self, _round: u32, _outcome: &RoundOutcome) {}

    /// The rolls were equal; the round will be replayed.
    fn round_tied(&mut self, _round: u32) {}

    /// The round was decided and the player's score is now `score`.
    fn round_scored(&mut self, _round: u32, _outcome: &RoundOutcome, _score: i64) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Everything the final results screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// What was (or should have been) persisted.
    pub summary: SessionSummary,
    /// When setup completed.
    pub started_at: NaiveDateTime,
    /// When the last round was decided.
    pub ended_at: NaiveDateTime,
    /// Label of the level played, if the round count matches one.
    pub level_label: Option<String>,
    /// Outcome for the player.
    pub verdict: Verdict,
}

/// The `Setup` phase: binds a player name and a round count.
#[derive(Debug, Clone)]
pub struct SessionSetup<'a> {
    settings: &'a GameSettings,
    name: Option<String>,
    round_count: Option<u32>,
}

impl<'a> SessionSetup<'a> {
    /// Begin setting up a session.
    pub fn new(settings: &'a GameSettings) -> Self {
        Self {
            settings,
            name: None,
            round_count: None,
        }
    }

    /// Bind the player name. Empty or whitespace-only names are rejected.
    pub fn name(&mut self, name: &str) -> DiceResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DiceError::InvalidInput("name cannot be empty".to_string()));
        }
        self.name = Some(name.to_string());
        Ok(())
    }

    /// Bind the round count from a level code such as `"2"`.
    pub fn level(&mut self, code: &str) -> DiceResult<()> {
        let rounds = self
            .settings
            .round_count_for(code)
            .ok_or_else(|| DiceError::InvalidInput(format!("unknown level '{}'", code.trim())))?;
        self.round_count = Some(rounds);
        Ok(())
    }

    /// Bind the round count directly. It must match one of the levels.
    pub fn round_count(&mut self, rounds: u32) -> DiceResult<()> {
        if !self.settings.is_valid_round_count(rounds) {
            return Err(DiceError::InvalidInput(format!(
                "{rounds} rounds is not one of the game levels"
            )));
        }
        self.round_count = Some(rounds);
        Ok(())
    }

    /// Always [`Phase::Setup`].
    pub fn phase(&self) -> Phase {
        Phase::Setup
    }

    /// Finish setup and move to [`Phase::Playing`].
    ///
    /// Fails with [`DiceError::InvalidInput`] unless both the name and the
    /// round count are bound.
    pub fn start<P, C>(
        self,
        player_roller: P,
        opponent_roller: C,
    ) -> DiceResult<SessionEngine<'a, P, C>>
    where
        P: Roller,
        C: Roller,
    {
        let name = self
            .name
            .ok_or_else(|| DiceError::InvalidInput("player name not set".to_string()))?;
        let round_count = self
            .round_count
            .ok_or_else(|| DiceError::InvalidInput("game level not set".to_string()))?;

        let player = Contestant::new(&name, player_roller)?;
        let opponent = Contestant::computer(opponent_roller);
        let started_at = Local::now().naive_local();

        info!(player = %name, rounds = round_count, "session started");

        Ok(SessionEngine {
            settings: self.settings,
            phase: Phase::Playing,
            player,
            opponent,
            round_count,
            rounds_played: 0,
            started_at,
            report: None,
        })
    }
}

/// Plays the rounds of one session and records the result.
///
/// Only the player's score is tracked; the opponent just rolls.
#[derive(Debug)]
pub struct SessionEngine<'a, P, C> {
    settings: &'a GameSettings,
    phase: Phase,
    player: Contestant<P>,
    opponent: Contestant<C>,
    round_count: u32,
    rounds_played: u32,
    started_at: NaiveDateTime,
    report: Option<SessionReport>,
}

impl<P: Roller, C: Roller> SessionEngine<'_, P, C> {
    /// `Playing` until every round is done and [`finish`](Self::finish) has
    /// been called, `Finished` afterwards.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human side.
    pub fn player(&self) -> &Contestant<P> {
        &self.player
    }

    /// The automated side.
    pub fn opponent(&self) -> &Contestant<C> {
        &self.opponent
    }

    /// Number of scored rounds this session plays.
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Scored rounds completed so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// When setup completed.
    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// The final report, once [`finish`](Self::finish) has run.
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    /// Play the next round to a decision.
    ///
    /// Equal rolls leave the score alone and are rolled again under the same
    /// round number until someone rolls higher.
    pub fn play_round(&mut self, observer: &mut impl SessionObserver) -> DiceResult<RoundOutcome> {
        if self.phase != Phase::Playing || self.rounds_played >= self.round_count {
            return Err(DiceError::InvalidInput(
                "no rounds left to play in this session".to_string(),
            ));
        }

        let round = self.rounds_played + 1;
        loop {
            observer.round_started(round, self.round_count);

            let player_roll = self.player.roll()?;
            let computer_roll = self.opponent.roll()?;
            let outcome = resolve(player_roll, computer_roll);
            observer.rolled(round, &outcome);

            if outcome.is_tie() {
                debug!(round, face = %player_roll, "tie, replaying round");
                observer.round_tied(round);
                continue;
            }

            self.player.update_score(outcome.delta);
            self.rounds_played = round;
            debug!(
                round,
                player = %player_roll,
                computer = %computer_roll,
                delta = outcome.delta,
                score = self.player.score(),
                "round scored"
            );
            observer.round_scored(round, &outcome, self.player.score());
            return Ok(outcome);
        }
    }

    /// Play every remaining round, pausing between them as configured.
    pub fn play(&mut self, observer: &mut impl SessionObserver) -> DiceResult<()> {
        while self.rounds_played < self.round_count {
            self.play_round(observer)?;
            let pause = self.settings.round_pause();
            if self.rounds_played < self.round_count && !pause.is_zero() {
                std::thread::sleep(pause);
            }
        }
        Ok(())
    }

    /// Close the session and append its summary to `store`.
    ///
    /// The engine is `Finished` afterwards even if saving fails; the report
    /// then stays available through [`report`](Self::report) and the error
    /// is returned.
    pub fn finish(&mut self, store: &ResultStore) -> DiceResult<&SessionReport> {
        if self.phase != Phase::Playing || self.rounds_played < self.round_count {
            return Err(DiceError::InvalidInput(format!(
                "session cannot finish after {} of {} rounds",
                self.rounds_played, self.round_count
            )));
        }

        let score = self.player.score();
        let summary = SessionSummary::new(self.player.name(), self.round_count, score);
        let report = SessionReport {
            started_at: self.started_at,
            ended_at: summary.timestamp,
            level_label: self
                .settings
                .level_label(self.round_count)
                .map(str::to_string),
            verdict: Verdict::from_score(score),
            summary: summary.clone(),
        };
        self.phase = Phase::Finished;
        let report = self.report.insert(report);

        info!(
            player = %summary.player_name,
            score,
            verdict = %report.verdict,
            "session finished"
        );
        store.append(summary)?;
        Ok(report)
    }
}
