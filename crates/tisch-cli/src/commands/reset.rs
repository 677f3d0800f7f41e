use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn run(file: &Path, force: bool) -> Result<(), String> {
    if !file.exists() {
        println!("  Nothing to reset: {} does not exist.", file.display());
        return Ok(());
    }

    if !force {
        print!(
            "  This deletes {} and all players, rolls, and settings. Continue? [y/N] ",
            file.display()
        );
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| e.to_string())?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("  Aborted.");
            return Ok(());
        }
    }

    let mut session = super::open_session(file, None);
    session.reset().map_err(|e| e.to_string())?;
    println!("  Session reset; the next command starts from defaults.");
    Ok(())
}
