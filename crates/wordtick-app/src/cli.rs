use std::path::PathBuf;

use clap::Parser;
use wordtick_types::PhoneticMode;

/// Rotating vocabulary suffix for a terminal clock
#[derive(Debug, Parser)]
#[command(name = "wordtick", version)]
pub struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tab-separated word list to use instead of the embedded one
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Clock text buffer capacity in characters, terminator included
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Turn the word display on
    #[arg(long)]
    pub enable: bool,

    /// Seconds between automatic switches (0 = manual only)
    #[arg(long)]
    pub interval: Option<i32>,

    /// Phonetic transcription to show: uk, us or both
    #[arg(long)]
    pub phonetic_mode: Option<PhoneticMode>,

    /// Print the current suffix once and exit
    #[arg(long)]
    pub once: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
