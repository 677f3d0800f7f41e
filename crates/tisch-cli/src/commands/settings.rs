use std::path::Path;

use tisch_core::Theme;

pub fn run(
    file: &Path,
    theme: Option<&str>,
    sounds: Option<&str>,
    autosave: Option<&str>,
) -> Result<(), String> {
    let mut session = super::open_session(file, None);

    let mut changed = false;
    if let Some(theme) = theme {
        let theme = Theme::parse(theme).map_err(|e| e.to_string())?;
        session.set_theme(theme).map_err(|e| e.to_string())?;
        changed = true;
    }
    if let Some(sounds) = sounds {
        session
            .set_sounds(parse_on_off(sounds)?)
            .map_err(|e| e.to_string())?;
        changed = true;
    }
    if let Some(autosave) = autosave {
        session
            .set_auto_save(parse_on_off(autosave)?)
            .map_err(|e| e.to_string())?;
        changed = true;
    }

    let settings = session.settings();
    if changed {
        println!("  Settings updated.");
    }
    println!("  theme: {}", settings.theme);
    println!("  sounds: {}", on_off(settings.sounds));
    println!("  auto-save: {}", on_off(settings.auto_save));
    Ok(())
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on or off, got {other}")),
    }
}

fn on_off(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}
