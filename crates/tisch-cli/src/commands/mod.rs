pub mod export;
pub mod history;
pub mod import;
pub mod player;
pub mod repl;
pub mod reset;
pub mod roll;
pub mod settings;
pub mod stats;

use std::path::Path;

use tisch_session::{Session, SessionConfig};

/// Open the session at `file`, surfacing any load warning on stderr.
pub fn open_session(file: &Path, seed: Option<u64>) -> Session {
    let mut config = SessionConfig::new(file);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::open(config);
    if let Some(warning) = session.take_load_warning() {
        eprintln!("warning: {warning}");
    }
    session
}
