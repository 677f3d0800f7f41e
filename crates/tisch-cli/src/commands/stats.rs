use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let session = super::open_session(file, None);
    let roster = session.roster().stats();
    let history = session.history();

    println!("  {}", "Roster".bold());
    println!(
        "    {} players: {} alive, {} eliminated, {} low HP",
        roster.total, roster.alive, roster.eliminated, roster.low_hp
    );
    println!(
        "    total HP {} (avg {:.1})",
        roster.total_hp, roster.average_hp
    );

    println!("  {}", "Dice".bold());
    println!(
        "    {} rolls recorded, grand total {}",
        history.len(),
        history.grand_total()
    );
    println!(
        "    most used die: {}",
        history.most_used_die().unwrap_or("d6")
    );

    match session.last_saved() {
        Some(at) => println!("  Last saved: {}", at.format("%Y-%m-%d %H:%M:%S")),
        None => println!("  Last saved: never"),
    }

    Ok(())
}
