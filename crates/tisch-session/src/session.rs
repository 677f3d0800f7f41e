//! The session service object and its command dispatch.
//!
//! `Session` wires the store, roster, history, and settings together and
//! exposes both a typed API (for programmatic front-ends) and a line-based
//! `process()` dispatch (for REPLs). Mutations persist the full document
//! after each change while auto-save is on.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tisch_core::{ColorTag, Player, RollRecord, SessionDocument, Settings, Theme};
use tisch_dice::{Aggregate, RollExpr, roll_many};
use tisch_store::{History, PlayerPatch, Roster, Store};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::transfer::{EXPORT_VERSION, ExportDocument, ImportDocument};

/// Show the aggregate block when at least this many dice were rolled.
const AGGREGATE_MIN_DICE: u32 = 3;

/// An interactive tabletop session.
pub struct Session {
    store: Store,
    roster: Roster,
    history: History,
    settings: Settings,
    last_saved: Option<DateTime<Utc>>,
    rng: StdRng,
    load_warning: Option<String>,
}

impl Session {
    /// Open a session: load the document (or defaults) and build the
    /// in-memory collections from it.
    pub fn open(config: SessionConfig) -> Self {
        let store = Store::new(&config.path);
        let loaded = store.load();
        let SessionDocument {
            players,
            dice_history,
            mut settings,
            last_saved,
        } = loaded.document;

        if let Some(auto_save) = config.auto_save {
            settings.auto_save = auto_save;
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            store,
            roster: Roster::from_players(players),
            history: History::from_records(dice_history),
            settings,
            last_saved,
            rng,
            load_warning: loaded.warning,
        }
    }

    /// A warning from loading (corrupt or unreadable file), surfaced once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// The player roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The roll history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// When the document was last written, if ever.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    fn document(&self) -> SessionDocument {
        SessionDocument {
            players: self.roster.list().to_vec(),
            dice_history: self.history.list().to_vec(),
            settings: self.settings.clone(),
            last_saved: self.last_saved,
        }
    }

    /// Write the full document now, regardless of the auto-save setting.
    pub fn save(&mut self) -> SessionResult<()> {
        let mut doc = self.document();
        self.store.save(&mut doc)?;
        self.last_saved = doc.last_saved;
        Ok(())
    }

    fn maybe_save(&mut self) -> SessionResult<()> {
        if self.settings.auto_save {
            self.save()?;
        }
        Ok(())
    }

    /// Delete the stored document and clear the in-memory state back to
    /// defaults. The RNG keeps its seed.
    pub fn reset(&mut self) -> SessionResult<()> {
        self.store.reset()?;
        self.roster = Roster::new();
        self.history = History::new();
        self.settings = Settings::default();
        self.last_saved = None;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Typed API
    // -----------------------------------------------------------------

    /// Roll dice per the expression and record the result.
    pub fn roll(&mut self, expr: RollExpr) -> SessionResult<RollRecord> {
        let outcomes = roll_many(expr.die, expr.quantity, &mut self.rng);
        let record = self
            .history
            .record(&expr.die.to_string(), expr.die.sides(), outcomes)
            .clone();
        self.maybe_save()?;
        Ok(record)
    }

    /// Add a player at full HP. Returns the stored player.
    pub fn add_player(
        &mut self,
        name: &str,
        hp: i64,
        color: ColorTag,
    ) -> SessionResult<Player> {
        let player = self.roster.add(name, hp, color)?;
        self.maybe_save()?;
        Ok(player)
    }

    /// Apply a patch to a player. Returns `false` (no-op, caller may warn)
    /// when the id is unknown. An empty patch changes and saves nothing.
    pub fn edit_player(&mut self, id: u64, patch: PlayerPatch) -> SessionResult<bool> {
        if patch.is_empty() {
            return Ok(self.roster.get(id).is_some());
        }
        let found = self.roster.update(id, patch)?;
        if found {
            self.maybe_save()?;
        }
        Ok(found)
    }

    /// Remove a player. Returns whether anything was removed.
    pub fn remove_player(&mut self, id: u64) -> SessionResult<bool> {
        let removed = self.roster.remove(id);
        if removed {
            self.maybe_save()?;
        }
        Ok(removed)
    }

    /// Adjust a player's HP by a signed delta. Returns the updated player.
    pub fn change_hp(&mut self, id: u64, delta: i64) -> SessionResult<Player> {
        if self.roster.change_hp(id, delta).is_none() {
            return Err(SessionError::PlayerNotFound(id));
        }
        self.maybe_save()?;
        let player = self
            .roster
            .get(id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        Ok(player.clone())
    }

    /// Reset one player to full HP.
    pub fn reset_player(&mut self, id: u64) -> SessionResult<Player> {
        if !self.roster.reset_hp(id) {
            return Err(SessionError::PlayerNotFound(id));
        }
        self.maybe_save()?;
        let player = self
            .roster
            .get(id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        Ok(player.clone())
    }

    /// Reset every player to full HP.
    pub fn reset_all_players(&mut self) -> SessionResult<()> {
        self.roster.reset_all();
        self.maybe_save()
    }

    /// Forget all recorded rolls.
    pub fn clear_history(&mut self) -> SessionResult<()> {
        self.history.clear();
        self.maybe_save()
    }

    /// Change the theme.
    pub fn set_theme(&mut self, theme: Theme) -> SessionResult<()> {
        self.settings.theme = theme;
        self.maybe_save()
    }

    /// Toggle sounds.
    pub fn set_sounds(&mut self, sounds: bool) -> SessionResult<()> {
        self.settings.sounds = sounds;
        self.maybe_save()
    }

    /// Toggle auto-save. Turning it on writes immediately.
    pub fn set_auto_save(&mut self, auto_save: bool) -> SessionResult<()> {
        self.settings.auto_save = auto_save;
        self.maybe_save()
    }

    /// Export the full session as formatted JSON.
    pub fn export_all(&self) -> SessionResult<String> {
        let export = ExportDocument {
            players: self.roster.list().to_vec(),
            dice_history: self.history.list().to_vec(),
            settings: self.settings.clone(),
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        };
        serde_json::to_string_pretty(&export).map_err(|e| SessionError::Store(e.into()))
    }

    /// Import players and settings from JSON text.
    ///
    /// Players replace the roster wholesale; settings keys present in the
    /// payload override current values. Dice history is never imported, so
    /// re-importing an export cannot duplicate rolls. A malformed payload
    /// changes nothing.
    pub fn import_all(&mut self, text: &str) -> SessionResult<String> {
        let doc: ImportDocument =
            serde_json::from_str(text).map_err(|e| SessionError::Import(e.to_string()))?;

        let mut parts = Vec::new();
        if let Some(players) = doc.players {
            let count = players.len();
            self.roster = Roster::from_players(players);
            parts.push(format!(
                "imported {count} player{}",
                if count == 1 { "" } else { "s" }
            ));
        }
        if let Some(patch) = doc.settings {
            patch.apply(&mut self.settings);
            parts.push("updated settings".to_string());
        }
        if parts.is_empty() {
            return Ok("Nothing to import.".to_string());
        }

        self.maybe_save()?;
        Ok(format!(
            "Import complete: {}. Dice history is never imported.",
            parts.join(", ")
        ))
    }

    // -----------------------------------------------------------------
    // Command dispatch
    // -----------------------------------------------------------------

    /// Process one line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(rest),
            "players" => Ok(self.do_players()),
            "player" => self.do_player(rest),
            "hp" => self.do_hp(rest),
            "reset" => self.do_reset(rest),
            "remove" => self.do_remove(rest),
            "rename" => self.do_rename(rest),
            "recolor" => self.do_recolor(rest),
            "history" => self.do_history(rest),
            "clear" if rest.eq_ignore_ascii_case("history") => {
                self.clear_history()?;
                Ok("History cleared.".to_string())
            }
            "stats" => Ok(self.do_stats()),
            "set" => self.do_set(rest),
            "export" => self.export_all(),
            "save" => {
                self.save()?;
                Ok("Saved.".to_string())
            }
            "status" => Ok(self.do_status()),
            "help" => Ok(do_help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn do_roll(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage(
                "usage: roll <expression> (e.g. roll 3d6)".to_string(),
            ));
        }
        let expr = RollExpr::parse(rest)?;
        let record = self.roll(expr)?;

        let mut output = record.to_string();
        if record.quantity >= AGGREGATE_MIN_DICE
            && let Some(agg) = Aggregate::from_outcomes(&record.outcomes)
        {
            output.push('\n');
            output.push_str(&agg.to_string());
            output.push_str(&format!("\ncounts: {}", format_histogram(&agg)));
        }
        Ok(output)
    }

    fn do_players(&self) -> String {
        if self.roster.is_empty() {
            return "No players yet. Try: player add <name> <hp>".to_string();
        }
        let mut out = format!("Players ({}):\n", self.roster.len());
        for p in self.roster.list() {
            out.push_str(&format!("  [{}] {}", p.id, format_player(p)));
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn do_player(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                let (name, hp, color) = parse_player_add(arg)?;
                let player = self.add_player(&name, hp, color)?;
                Ok(format!("Player added: [{}] {}", player.id, format_player(&player)))
            }
            "list" => Ok(self.do_players()),
            _ => Err(SessionError::Usage(
                "usage: player add <name> <hp> [color]".to_string(),
            )),
        }
    }

    fn do_hp(&mut self, rest: &str) -> SessionResult<String> {
        let mut parts = rest.split_whitespace();
        let (Some(id), Some(delta), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SessionError::Usage(
                "usage: hp <id> <delta> (e.g. hp 1 -5)".to_string(),
            ));
        };
        let id = parse_id(id)?;
        let delta: i64 = delta
            .parse()
            .map_err(|_| SessionError::Usage(format!("not a number: {delta}")))?;

        let player = self.change_hp(id, delta)?;
        let mut output = format_player(&player);
        if player.is_eliminated() {
            output.push_str(&format!("\n{} is eliminated!", player.name));
        }
        Ok(output)
    }

    fn do_reset(&mut self, rest: &str) -> SessionResult<String> {
        if rest.eq_ignore_ascii_case("all") {
            self.reset_all_players()?;
            return Ok("All players reset to full HP.".to_string());
        }
        let id = parse_id(rest)?;
        let player = self.reset_player(id)?;
        Ok(format_player(&player))
    }

    fn do_remove(&mut self, rest: &str) -> SessionResult<String> {
        let id = parse_id(rest)?;
        if self.remove_player(id)? {
            Ok(format!("Player {id} removed."))
        } else {
            Ok(format!("No player with id {id}; nothing removed."))
        }
    }

    fn do_rename(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let (Some(id), Some(name)) = (parts.first(), parts.get(1)) else {
            return Err(SessionError::Usage(
                "usage: rename <id> <new name>".to_string(),
            ));
        };
        let id = parse_id(id)?;
        let patch = PlayerPatch {
            name: Some(name.to_string()),
            ..Default::default()
        };
        if self.edit_player(id, patch)? {
            Ok(format!("Player {id} renamed to {name}."))
        } else {
            Ok(format!("No player with id {id}; nothing renamed."))
        }
    }

    fn do_recolor(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let [id, color] = parts.as_slice() else {
            return Err(SessionError::Usage(
                "usage: recolor <id> <color> (e.g. recolor 1 violet-pink)".to_string(),
            ));
        };
        let id = parse_id(id)?;
        let color = ColorTag::parse(color).map_err(SessionError::Core)?;
        let patch = PlayerPatch {
            color: Some(color),
            ..Default::default()
        };
        if self.edit_player(id, patch)? {
            Ok(format!("Player {id} is now {color}."))
        } else {
            Ok(format!("No player with id {id}; nothing changed."))
        }
    }

    fn do_history(&self, rest: &str) -> SessionResult<String> {
        let limit = if rest.is_empty() {
            10
        } else {
            rest.parse::<usize>()
                .map_err(|_| SessionError::Usage("usage: history [count]".to_string()))?
        };

        if self.history.is_empty() {
            return Ok("No rolls recorded.".to_string());
        }

        let shown = self.history.list().iter().take(limit);
        let mut out = format!(
            "Roll history ({} recorded, newest first):\n",
            self.history.len()
        );
        for record in shown {
            out.push_str(&format!("  #{} {}\n", record.id, record));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_stats(&self) -> String {
        let roster = self.roster.stats();
        let mut out = format!(
            "Players: {} total, {} alive, {} eliminated, {} low HP\n",
            roster.total, roster.alive, roster.eliminated, roster.low_hp
        );
        out.push_str(&format!(
            "Total HP: {} (avg {:.1})\n",
            roster.total_hp, roster.average_hp
        ));
        out.push_str(&format!(
            "Rolls: {} recorded, grand total {}\n",
            self.history.len(),
            self.history.grand_total()
        ));
        out.push_str(&format!(
            "Most used die: {}",
            self.history.most_used_die().unwrap_or("d6")
        ));
        out
    }

    fn do_set(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        match parts.as_slice() {
            ["theme", value] => {
                let theme = Theme::parse(value).map_err(SessionError::Core)?;
                self.set_theme(theme)?;
                Ok(format!("Theme set to {theme}."))
            }
            ["sounds", value] => {
                let on = parse_on_off(value)?;
                self.set_sounds(on)?;
                Ok(format!("Sounds {}.", if on { "on" } else { "off" }))
            }
            ["autosave", value] => {
                let on = parse_on_off(value)?;
                self.set_auto_save(on)?;
                Ok(format!("Auto-save {}.", if on { "on" } else { "off" }))
            }
            _ => Err(SessionError::Usage(
                "usage: set theme <medieval|dark|light> | set sounds on|off | set autosave on|off"
                    .to_string(),
            )),
        }
    }

    fn do_status(&self) -> String {
        let stats = self.roster.stats();
        let mut out = format!(
            "Players: {} ({} eliminated)\n",
            stats.total, stats.eliminated
        );
        out.push_str(&format!("Rolls recorded: {}\n", self.history.len()));
        out.push_str(&format!(
            "Theme: {} | sounds {} | auto-save {}\n",
            self.settings.theme,
            if self.settings.sounds { "on" } else { "off" },
            if self.settings.auto_save { "on" } else { "off" },
        ));
        match self.last_saved {
            Some(at) => out.push_str(&format!("Last saved: {}\n", at.to_rfc3339())),
            None => out.push_str("Last saved: never\n"),
        }
        out.push_str(&format!("Store: {}", self.store.path().display()));
        out
    }
}

/// One-line player rendering shared by several commands.
fn format_player(p: &Player) -> String {
    let mut out = format!("{} {}/{} ({})", p.name, p.hp, p.max_hp, p.color);
    if p.hp_exceeded() {
        out.push_str(" [exceeded]");
    } else if p.is_eliminated() {
        out.push_str(" [eliminated]");
    }
    out
}

/// Render a histogram as "value:count" pairs in value order.
fn format_histogram(agg: &Aggregate) -> String {
    agg.histogram
        .iter()
        .map(|(value, count)| format!("{value}:{count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse `<name…> <hp> [color]`, allowing multi-word names.
fn parse_player_add(arg: &str) -> SessionResult<(String, i64, ColorTag)> {
    let usage = || SessionError::Usage("usage: player add <name> <hp> [color]".to_string());
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(usage());
    }

    // The trailing token may be a color; the token before the tail is hp.
    let (color, rest) = match ColorTag::parse(tokens[tokens.len() - 1]) {
        Ok(color) if tokens.len() >= 3 => (color, &tokens[..tokens.len() - 1]),
        _ => (ColorTag::default(), &tokens[..]),
    };

    let (hp_token, name_tokens) = rest.split_last().ok_or_else(usage)?;
    let hp: i64 = hp_token.parse().map_err(|_| usage())?;
    if name_tokens.is_empty() {
        return Err(usage());
    }
    Ok((name_tokens.join(" "), hp, color))
}

fn parse_id(s: &str) -> SessionResult<u64> {
    s.trim()
        .parse()
        .map_err(|_| SessionError::Usage(format!("not a player id: {s}")))
}

fn parse_on_off(s: &str) -> SessionResult<bool> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(SessionError::Usage(format!("expected on or off, got {other}"))),
    }
}

fn do_help(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "roll" | "dice" => "\
Dice Commands:
  roll <expr>          Roll dice, e.g. roll 3d6, roll d20, roll coin
                       (3+ dice also print aggregate statistics)
  history [n]          Show the latest rolls (default 10)
  clear history        Forget all recorded rolls"
            .to_string(),
        "player" | "players" | "hp" => "\
Player Commands:
  player add <name> <hp> [color]   Add a player at full HP
  players                          List the roster
  hp <id> <delta>                  Damage (negative) or heal (positive)
  reset <id> | reset all           Restore HP to maximum
  rename <id> <name>               Rename a player
  recolor <id> <color>             Change the card color
  remove <id>                      Remove a player

Colors: red-orange, green-brown, turquoise-blue, violet-pink,
  gold-bronze, silver-grey"
            .to_string(),
        "set" | "settings" => "\
Settings Commands:
  set theme <medieval|dark|light>
  set sounds on|off
  set autosave on|off"
            .to_string(),
        _ => "\
Tischrunde Commands:
  roll <expr>            Roll dice (e.g. 3d6, d20, coin)
  player add <name> <hp> [color]
  players                List players
  hp <id> <delta>        Adjust a player's HP
  reset <id>|all         Restore HP
  rename|recolor|remove  Manage players
  history [n]            Show recent rolls
  clear history          Forget recorded rolls
  stats                  Roster and dice statistics
  set …                  Change settings
  export                 Print the session as JSON
  save                   Write the session document now
  status                 Show session status
  help [roll|player|set] Show help
  quit                   Exit"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_session(dir: &TempDir) -> Session {
        let path = dir.path().join("session.json");
        Session::open(SessionConfig::new(path).with_seed(42))
    }

    #[test]
    fn open_empty_session() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        assert!(s.roster().is_empty());
        assert!(s.history().is_empty());
        assert!(s.last_saved().is_none());
        assert!(s.take_load_warning().is_none());
    }

    #[test]
    fn roll_records_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);

        let output = s.process("roll 2d6").unwrap();
        assert!(output.starts_with("2d6: ["));
        assert_eq!(s.history().len(), 1);
        assert!(s.last_saved().is_some());

        // A fresh session sees the roll.
        let s2 = test_session(&dir);
        assert_eq!(s2.history().len(), 1);
    }

    #[test]
    fn roll_three_or_more_shows_aggregate() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        let output = s.process("roll 5d6").unwrap();
        assert!(output.contains("avg"));
        assert!(output.contains("counts:"));

        let short = s.process("roll 2d6").unwrap();
        assert!(!short.contains("avg"));
    }

    #[test]
    fn roll_rejects_bad_expressions() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        assert!(s.process("roll 0d6").is_err());
        assert!(s.process("roll banana").is_err());
        assert!(s.process("roll").is_err());
        assert!(s.history().is_empty());
    }

    #[test]
    fn roll_coin_outcomes_are_binary() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("roll 20coin").unwrap();
        for &v in &s.history().list()[0].outcomes {
            assert!(v == 0 || v == 1);
        }
    }

    #[test]
    fn player_add_and_remove_scenario() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);

        let out = s.process("player add Aria 20").unwrap();
        assert!(out.contains("[1] Aria 20/20"));
        assert_eq!(s.roster().len(), 1);

        let out = s.process("player add Boro 15 green-brown").unwrap();
        assert!(out.contains("[2] Boro 15/15 (green-brown)"));
        assert_eq!(s.roster().len(), 2);

        s.process("remove 1").unwrap();
        assert_eq!(s.roster().len(), 1);
        assert_eq!(s.roster().list()[0].id, 2);
        assert_eq!(s.roster().list()[0].name, "Boro");
    }

    #[test]
    fn player_add_multiword_name() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Guard Captain 30 gold-bronze").unwrap();
        assert_eq!(s.roster().list()[0].name, "Guard Captain");
        assert_eq!(s.roster().list()[0].color, ColorTag::GoldBronze);
    }

    #[test]
    fn player_add_rejects_bad_input() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        assert!(s.process("player add Aria 0").is_err());
        assert!(s.process("player add Aria").is_err());
        assert!(s.process("player add").is_err());
        assert!(s.roster().is_empty());
    }

    #[test]
    fn hp_floors_at_zero_with_elimination_notice() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 5").unwrap();

        let out = s.process("hp 1 -1000").unwrap();
        assert!(out.contains("Aria 0/5"));
        assert!(out.contains("Aria is eliminated!"));
        assert_eq!(s.roster().get(1).unwrap().hp, 0);
    }

    #[test]
    fn hp_can_exceed_max() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 10").unwrap();
        let out = s.process("hp 1 5").unwrap();
        assert!(out.contains("Aria 15/10"));
        assert!(out.contains("[exceeded]"));
    }

    #[test]
    fn hp_extreme_delta_saturates() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();

        let out = s.process("hp 1 9223372036854775807").unwrap();
        assert!(out.contains("[exceeded]"));
        assert_eq!(s.roster().get(1).unwrap().hp, i64::MAX);

        let out = s.process("hp 1 -9223372036854775808").unwrap();
        assert!(out.contains("Aria 0/20"));
    }

    #[test]
    fn hp_unknown_player_errors() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        let err = s.process("hp 9 -1").unwrap_err();
        assert!(matches!(err, SessionError::PlayerNotFound(9)));
    }

    #[test]
    fn reset_one_and_all() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();
        s.process("player add Boro 15").unwrap();
        s.process("hp 1 -10").unwrap();
        s.process("hp 2 -5").unwrap();

        let out = s.process("reset 1").unwrap();
        assert!(out.contains("Aria 20/20"));

        s.process("reset all").unwrap();
        assert_eq!(s.roster().get(2).unwrap().hp, 15);
    }

    #[test]
    fn rename_and_recolor() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();

        s.process("rename 1 Arya Strongheart").unwrap();
        assert_eq!(s.roster().get(1).unwrap().name, "Arya Strongheart");

        s.process("recolor 1 silver-grey").unwrap();
        assert_eq!(s.roster().get(1).unwrap().color, ColorTag::SilverGrey);
    }

    #[test]
    fn edit_with_empty_patch_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut s = Session::open(SessionConfig::new(&path).with_seed(42));
        s.add_player("Aria", 20, ColorTag::default()).unwrap();
        let saved_at = s.last_saved();

        assert!(s.edit_player(1, PlayerPatch::default()).unwrap());
        assert_eq!(s.last_saved(), saved_at);
        assert!(s.roster().get(1).unwrap().updated_at.is_none());
    }

    #[test]
    fn rename_unknown_id_is_noop_with_message() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        let out = s.process("rename 9 Ghost").unwrap();
        assert!(out.contains("No player with id 9"));
    }

    #[test]
    fn remove_absent_is_noop_with_message() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        let out = s.process("remove 9").unwrap();
        assert!(out.contains("nothing removed"));
    }

    #[test]
    fn history_listing_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        assert_eq!(s.process("history").unwrap(), "No rolls recorded.");

        for _ in 0..3 {
            s.process("roll d6").unwrap();
        }
        let out = s.process("history 2").unwrap();
        assert!(out.contains("3 recorded"));
        assert!(out.contains("#3"));
        assert!(out.contains("#2"));
        assert!(!out.contains("#1 "));

        s.process("clear history").unwrap();
        assert!(s.history().is_empty());
    }

    #[test]
    fn stats_output() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();
        s.process("roll 2d6").unwrap();
        s.process("roll d20").unwrap();
        s.process("roll 1d6").unwrap();

        let out = s.process("stats").unwrap();
        assert!(out.contains("Players: 1 total, 1 alive"));
        assert!(out.contains("Rolls: 3 recorded"));
        assert!(out.contains("Most used die: d6"));
    }

    #[test]
    fn settings_commands() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);

        s.process("set theme dark").unwrap();
        assert_eq!(s.settings().theme, Theme::Dark);

        s.process("set sounds off").unwrap();
        assert!(!s.settings().sounds);

        assert!(s.process("set theme neon").is_err());
        assert!(s.process("set sounds maybe").is_err());
        assert!(s.process("set gravity 9.81").is_err());
    }

    #[test]
    fn auto_save_off_defers_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut s = Session::open(
            SessionConfig::new(&path).with_seed(42).with_auto_save(false),
        );

        s.process("player add Aria 20").unwrap();
        assert!(!path.exists());

        s.process("save").unwrap();
        assert!(path.exists());
        let s2 = Session::open(SessionConfig::new(&path));
        assert_eq!(s2.roster().len(), 1);
    }

    #[test]
    fn export_then_import_does_not_duplicate_history() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();
        s.process("roll 3d6").unwrap();

        let exported = s.process("export").unwrap();
        assert!(exported.contains("\"diceHistory\""));

        s.process("roll 3d6").unwrap();
        assert_eq!(s.history().len(), 2);

        let summary = s.import_all(&exported).unwrap();
        assert!(summary.contains("imported 1 player"));
        // History kept both rolls despite the export carrying only one.
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn import_players_and_settings() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("roll d6").unwrap();

        let summary = s
            .import_all(
                r#"{"players":[{"id":1,"name":"X","hp":10,"maxHp":10}],"settings":{"theme":"dark"}}"#,
            )
            .unwrap();
        assert!(summary.contains("imported 1 player"));
        assert!(summary.contains("updated settings"));

        assert_eq!(s.roster().len(), 1);
        assert_eq!(s.roster().get(1).unwrap().name, "X");
        assert_eq!(s.settings().theme, Theme::Dark);
        assert!(s.settings().sounds); // untouched by the partial payload
        assert_eq!(s.history().len(), 1); // untouched
    }

    #[test]
    fn import_malformed_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();

        let err = s.import_all("{definitely not json").unwrap_err();
        assert!(matches!(err, SessionError::Import(_)));
        assert_eq!(s.roster().len(), 1);
        assert_eq!(s.roster().get(1).unwrap().name, "Aria");
    }

    #[test]
    fn import_resumes_id_sequence_after_imported_players() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.import_all(r#"{"players":[{"id":5,"name":"X","hp":10,"maxHp":10}]}"#)
            .unwrap();
        let player = s.add_player("Y", 10, ColorTag::default()).unwrap();
        assert_eq!(player.id, 6);
    }

    #[test]
    fn reset_clears_state_and_file() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();
        s.process("roll d6").unwrap();

        s.reset().unwrap();
        assert!(s.roster().is_empty());
        assert!(s.history().is_empty());
        assert!(s.last_saved().is_none());

        let s2 = test_session(&dir);
        assert!(s2.roster().is_empty());
    }

    #[test]
    fn corrupt_store_surfaces_warning_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{broken").unwrap();

        let mut s = Session::open(SessionConfig::new(&path).with_seed(42));
        let warning = s.take_load_warning().unwrap();
        assert!(warning.contains("starting from defaults"));
        assert!(s.take_load_warning().is_none());
        assert!(s.roster().is_empty());
    }

    #[test]
    fn seeded_sessions_roll_identically() {
        let dir1 = TempDir::new().unwrap();
        let dir2 = TempDir::new().unwrap();
        let mut s1 = test_session(&dir1);
        let mut s2 = test_session(&dir2);
        assert_eq!(
            s1.process("roll 10d20").unwrap(),
            s2.process("roll 10d20").unwrap()
        );
    }

    #[test]
    fn status_and_help_and_quit() {
        let dir = TempDir::new().unwrap();
        let mut s = test_session(&dir);
        s.process("player add Aria 20").unwrap();

        let status = s.process("status").unwrap();
        assert!(status.contains("Players: 1 (0 eliminated)"));
        assert!(status.contains("auto-save on"));

        let help = s.process("help").unwrap();
        assert!(help.contains("Tischrunde Commands"));
        let help = s.process("help player").unwrap();
        assert!(help.contains("Colors:"));

        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert_eq!(s.process("").unwrap(), "");
        assert!(matches!(
            s.process("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
    }
}
