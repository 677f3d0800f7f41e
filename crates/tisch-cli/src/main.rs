//! CLI frontend for the Tischrunde table companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tisch",
    about = "Tischrunde: dice rolling and player tracking for the game table",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session document path
    #[arg(short, long, global = true, default_value = "tischrunde.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice, e.g. "3d6", "d20", "coin"
    Roll {
        /// Roll expression (quantity + die)
        expr: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Manage the player roster
    Player {
        #[command(subcommand)]
        command: PlayerCommands,
    },

    /// Show the roll history
    History {
        /// How many rolls to show, newest first
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Forget all recorded rolls instead of listing them
        #[arg(long)]
        clear: bool,
    },

    /// Show roster and dice statistics
    Stats,

    /// Show or change session settings
    Settings {
        /// Set the theme: medieval, dark, light
        #[arg(long)]
        theme: Option<String>,

        /// Turn sounds on or off
        #[arg(long)]
        sounds: Option<String>,

        /// Turn auto-save on or off
        #[arg(long)]
        autosave: Option<String>,
    },

    /// Export the full session as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import players and settings from a JSON export (never dice history)
    Import {
        /// File containing the JSON payload
        input: PathBuf,
    },

    /// Delete the session document and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Start an interactive session
    Session {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum PlayerCommands {
    /// Add a player at full HP
    Add {
        /// Player name (quote multi-word names)
        name: String,

        /// Starting (and maximum) hit points
        hp: i64,

        /// Card color: red-orange, green-brown, turquoise-blue,
        /// violet-pink, gold-bronze, silver-grey
        #[arg(short, long, default_value = "red-orange")]
        color: String,
    },

    /// List the roster
    List,

    /// Adjust a player's HP by a signed delta (floors at 0)
    Hp {
        /// Player id
        id: u64,

        /// Change, e.g. -5 or 3 (use -- before negative values)
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Reset players back to full HP
    Reset {
        /// Player id (omit with --all)
        id: Option<u64>,

        /// Reset every player
        #[arg(long)]
        all: bool,
    },

    /// Change a player's name, hit points, or color
    Edit {
        /// Player id
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New hit points (also becomes the new maximum)
        #[arg(long)]
        hp: Option<i64>,

        /// New card color
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a player from the roster
    Remove {
        /// Player id
        id: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Commands::Roll { expr, seed } => commands::roll::run(&file, &expr, seed),
        Commands::Player { command } => match command {
            PlayerCommands::Add { name, hp, color } => {
                commands::player::add(&file, &name, hp, &color)
            }
            PlayerCommands::List => commands::player::list(&file),
            PlayerCommands::Hp { id, delta } => commands::player::hp(&file, id, delta),
            PlayerCommands::Reset { id, all } => commands::player::reset(&file, id, all),
            PlayerCommands::Edit {
                id,
                name,
                hp,
                color,
            } => commands::player::edit(&file, id, name, hp, color.as_deref()),
            PlayerCommands::Remove { id } => commands::player::remove(&file, id),
        },
        Commands::History { limit, clear } => commands::history::run(&file, limit, clear),
        Commands::Stats => commands::stats::run(&file),
        Commands::Settings {
            theme,
            sounds,
            autosave,
        } => commands::settings::run(&file, theme.as_deref(), sounds.as_deref(), autosave.as_deref()),
        Commands::Export { output } => commands::export::run(&file, output.as_deref()),
        Commands::Import { input } => commands::import::run(&file, &input),
        Commands::Reset { force } => commands::reset::run(&file, force),
        Commands::Session { seed } => commands::repl::run(&file, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
