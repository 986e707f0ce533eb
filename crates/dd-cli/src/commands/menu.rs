use colored::Colorize;

use dd_core::{DieRoller, GameSettings};

const FAREWELL: &str = "Thanks for playing!";

fn show_menu() {
    println!("Welcome to the game Dice!");
    println!("Press 1 to play.");
    println!("Press 2 to view results.");
    println!("Press 3 to quit.");
}

/// Main menu loop. Runs until the player quits or stdin closes.
pub fn run(settings: &GameSettings, dice: &mut DieRoller) -> Result<(), String> {
    loop {
        show_menu();
        let Some(choice) = super::read_line("Enter your choice (1, 2, or 3): ")? else {
            println!("{FAREWELL}");
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                if let Err(e) = super::play::run(settings, dice, None, None) {
                    println!("{}\n", format!("Error during game: {e}").yellow());
                }
            }
            "2" => {
                if let Err(e) = super::results::run(settings) {
                    println!("{}\n", format!("Error reading results: {e}").yellow());
                }
            }
            "3" => {
                println!("{FAREWELL}");
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter 1, 2, or 3.\n"),
        }
    }
}
