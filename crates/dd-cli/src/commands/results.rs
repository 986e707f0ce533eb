use comfy_table::{ContentArrangement, Table};

use dd_core::{GameSettings, ResultStore};

/// Print every stored game, oldest first.
pub fn run(settings: &GameSettings) -> Result<(), String> {
    let store = ResultStore::from_settings(settings);
    let results = store.load_all().map_err(|e| e.to_string())?;

    if results.is_empty() {
        println!("There are no saved results.\n");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Player", "Number of rounds", "Total score"]);

    for result in &results {
        table.add_row(vec![
            result.date_string(),
            result.player_name.clone(),
            result.round_count.to_string(),
            format!("{:+}", result.final_score),
        ]);
    }

    println!("Results of previous games:");
    println!("{table}");
    println!();
    let count = results.len();
    println!("  {count} {}", if count == 1 { "game" } else { "games" });
    println!();

    Ok(())
}
