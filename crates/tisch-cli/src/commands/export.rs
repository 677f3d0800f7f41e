use std::path::Path;

pub fn run(file: &Path, output: Option<&Path>) -> Result<(), String> {
    let session = super::open_session(file, None);
    let content = session.export_all().map_err(|e| e.to_string())?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
