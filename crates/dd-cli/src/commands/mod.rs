pub mod menu;
pub mod play;
pub mod results;

use std::io::{self, Write};

/// Print `prompt` and read one line from stdin.
/// Returns `None` once stdin is closed.
fn read_line(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => {
            println!();
            Ok(None)
        }
        Ok(_) => Ok(Some(line)),
        Err(e) => Err(e.to_string()),
    }
}
