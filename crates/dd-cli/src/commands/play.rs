use std::io;

use colored::Colorize;

use dd_core::{Automated, DieRoller, GameSettings, Interactive, ResultStore, SessionSetup};

use crate::render::{self, TerminalObserver};

/// Set up, play and record one game.
///
/// `name` and `level` skip the matching prompt when given; invalid values
/// passed that way are errors rather than reprompts.
pub fn run(
    settings: &GameSettings,
    dice: &mut DieRoller,
    name: Option<&str>,
    level: Option<&str>,
) -> Result<(), String> {
    let mut setup = SessionSetup::new(settings);

    match name {
        Some(name) => setup.name(name).map_err(|e| e.to_string())?,
        None => prompt_name(&mut setup)?,
    }
    match level {
        Some(code) => setup.level(code).map_err(|e| e.to_string())?,
        None => prompt_level(&mut setup, settings)?,
    }

    let player = Interactive::new(dice.fork(), io::stdin().lock(), io::stdout());
    let opponent = Automated::new(dice.fork());
    let mut engine = setup.start(player, opponent).map_err(|e| e.to_string())?;

    render::game_info(
        engine.player().name(),
        engine.round_count(),
        engine.started_at(),
    );

    engine
        .play(&mut TerminalObserver::new(settings))
        .map_err(|e| e.to_string())?;

    let store = ResultStore::from_settings(settings);
    let saved = engine.finish(&store).map(|_| ());
    if let Some(report) = engine.report() {
        render::final_results(report);
    }
    saved.map_err(|e| format!("{e} (the result was not saved)"))
}

fn prompt_name(setup: &mut SessionSetup<'_>) -> Result<(), String> {
    loop {
        let name = super::read_line("Enter your name: ")?.ok_or("input closed")?;
        match setup.name(&name) {
            Ok(()) => return Ok(()),
            Err(_) => println!("{}", "Name cannot be empty.".yellow()),
        }
    }
}

fn prompt_level(setup: &mut SessionSetup<'_>, settings: &GameSettings) -> Result<(), String> {
    let codes: Vec<&str> = settings.levels().iter().map(|l| l.code.as_str()).collect();

    println!("Choose the level of the game:");
    for level in settings.levels() {
        println!("{}. {} game ({} rounds)", level.code, level.label, level.rounds);
    }

    let prompt = format!("Enter the level of the game ({}): ", codes.join(", "));
    loop {
        let code = super::read_line(&prompt)?.ok_or("input closed")?;
        match setup.level(&code) {
            Ok(()) => return Ok(()),
            Err(_) => println!(
                "{}",
                format!("Wrong choice. Please enter {}.", codes.join(", ")).yellow()
            ),
        }
    }
}
