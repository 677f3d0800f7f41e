use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tisch_core::{ColorTag, Player, player::LOW_HP_THRESHOLD};
use tisch_store::PlayerPatch;

pub fn add(file: &Path, name: &str, hp: i64, color: &str) -> Result<(), String> {
    let color = ColorTag::parse(color).map_err(|e| e.to_string())?;
    let mut session = super::open_session(file, None);
    let player = session
        .add_player(name, hp, color)
        .map_err(|e| e.to_string())?;
    println!(
        "  {} [{}] {} at {}/{} ({})",
        "Added".bold(),
        player.id,
        player.name,
        player.hp,
        player.max_hp,
        player.color
    );
    Ok(())
}

pub fn list(file: &Path) -> Result<(), String> {
    let session = super::open_session(file, None);
    let roster = session.roster();

    if roster.is_empty() {
        println!("  No players yet. Try: tisch player add <name> <hp>");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "HP", "Color", "Status"]);

    for player in roster.list() {
        table.add_row(vec![
            player.id.to_string(),
            player.name.clone(),
            format!("{}/{}", player.hp, player.max_hp),
            player.color.to_string(),
            status_of(player).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} players", roster.len());
    Ok(())
}

pub fn hp(file: &Path, id: u64, delta: i64) -> Result<(), String> {
    let mut session = super::open_session(file, None);
    let player = session.change_hp(id, delta).map_err(|e| e.to_string())?;
    println!("  {}: {}/{}", player.name, player.hp, player.max_hp);
    if player.is_eliminated() {
        println!("  {}", format!("{} is eliminated!", player.name).red().bold());
    } else if player.hp_exceeded() {
        println!("  HP exceeds the maximum.");
    }
    Ok(())
}

pub fn reset(file: &Path, id: Option<u64>, all: bool) -> Result<(), String> {
    let mut session = super::open_session(file, None);
    match (id, all) {
        (_, true) => {
            session.reset_all_players().map_err(|e| e.to_string())?;
            println!("  All players reset to full HP.");
            Ok(())
        }
        (Some(id), false) => {
            let player = session.reset_player(id).map_err(|e| e.to_string())?;
            println!("  {}: {}/{}", player.name, player.hp, player.max_hp);
            Ok(())
        }
        (None, false) => Err("give a player id or --all".to_string()),
    }
}

pub fn edit(
    file: &Path,
    id: u64,
    name: Option<String>,
    hp: Option<i64>,
    color: Option<&str>,
) -> Result<(), String> {
    let color = color
        .map(|c| ColorTag::parse(c).map_err(|e| e.to_string()))
        .transpose()?;
    let patch = PlayerPatch { name, hp, color };
    if patch.is_empty() {
        return Err("nothing to change: give --name, --hp, or --color".to_string());
    }

    let mut session = super::open_session(file, None);
    let found = session.edit_player(id, patch).map_err(|e| e.to_string())?;
    if let Some(player) = found.then(|| session.roster().get(id)).flatten() {
        println!(
            "  Updated [{}] {} {}/{} ({})",
            player.id, player.name, player.hp, player.max_hp, player.color
        );
    } else {
        eprintln!("warning: no player with id {id}; nothing changed");
    }
    Ok(())
}

pub fn remove(file: &Path, id: u64) -> Result<(), String> {
    let mut session = super::open_session(file, None);
    if session.remove_player(id).map_err(|e| e.to_string())? {
        println!("  Player {id} removed.");
    } else {
        println!("  No player with id {id}; nothing removed.");
    }
    Ok(())
}

fn status_of(player: &Player) -> &'static str {
    if player.is_eliminated() {
        "eliminated"
    } else if player.hp_exceeded() {
        "exceeded"
    } else if player.is_low_hp(LOW_HP_THRESHOLD) {
        "low"
    } else {
        "ok"
    }
}
