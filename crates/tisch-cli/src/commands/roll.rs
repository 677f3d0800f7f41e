use std::path::Path;

use colored::Colorize;

use tisch_dice::{Aggregate, RollExpr};

/// Show the aggregate block when at least this many dice were rolled.
const AGGREGATE_MIN_DICE: u32 = 3;

pub fn run(file: &Path, expr: &str, seed: Option<u64>) -> Result<(), String> {
    let expr = RollExpr::parse(expr).map_err(|e| e.to_string())?;
    let mut session = super::open_session(file, seed);
    let record = session.roll(expr).map_err(|e| e.to_string())?;

    let values: Vec<String> = record.outcomes.iter().map(|v| v.to_string()).collect();
    println!(
        "  {} {}{}: [{}]",
        "Rolled".bold(),
        record.quantity,
        record.die,
        values.join(", ")
    );
    println!("  Total: {}", record.total.to_string().bold());

    if record.quantity >= AGGREGATE_MIN_DICE
        && let Some(agg) = Aggregate::from_outcomes(&record.outcomes)
    {
        println!();
        println!("  {}", agg);
        for (value, count) in &agg.histogram {
            let bar = "#".repeat(*count as usize);
            println!("  {value:>4} | {bar} {count}");
        }
    }

    Ok(())
}
