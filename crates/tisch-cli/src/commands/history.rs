use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path, limit: usize, clear: bool) -> Result<(), String> {
    let mut session = super::open_session(file, None);

    if clear {
        session.clear_history().map_err(|e| e.to_string())?;
        println!("  Roll history cleared.");
        return Ok(());
    }

    let history = session.history();
    if history.is_empty() {
        println!("  No rolls recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Roll", "Outcomes", "Total", "At"]);

    for record in history.list().iter().take(limit) {
        let values: Vec<String> = record.outcomes.iter().map(|v| v.to_string()).collect();
        table.add_row(vec![
            record.id.to_string(),
            format!("{}{}", record.quantity, record.die),
            values.join(", "),
            record.total.to_string(),
            record.rolled_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rolls recorded, newest first", history.len());
    Ok(())
}
