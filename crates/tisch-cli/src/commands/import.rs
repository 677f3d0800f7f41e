use std::path::Path;

pub fn run(file: &Path, input: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {e}", input.display()))?;

    let mut session = super::open_session(file, None);
    let summary = session.import_all(&text).map_err(|e| e.to_string())?;
    println!("  {summary}");
    Ok(())
}
