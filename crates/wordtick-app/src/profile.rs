use wordtick_config::Config;
use wordtick_config::words::WordsConfig;
use wordtick_core::{EmbeddedSource, FileSource, VocabularySource};

use crate::cli::Cli;

/// Word list compiled into the binary
pub const EMBEDDED_WORDS: &[u8] = include_bytes!("../data/cet4_words.tsv");
pub const EMBEDDED_WORDS_NAME: &str = "embedded cet4_words.tsv";

/// Config file (or defaults), then environment, then command line
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_json_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => {
            tracing::info!("No config file given, using defaults");
            Config::new()
        }
    };
    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.enable || cli.once {
        config.words.display_enabled = true;
    }
    if let Some(interval) = cli.interval {
        config.words.switch_interval_sec = interval;
    }
    if let Some(mode) = cli.phonetic_mode {
        config.words.phonetic_mode = mode;
    }
    if let Some(capacity) = cli.capacity {
        config.ui.suffix_capacity = capacity;
    }
    if let Some(words) = &cli.words {
        config.words.source_path = Some(words.display().to_string());
    }
}

pub fn vocabulary_source(words: &WordsConfig) -> Box<dyn VocabularySource + Send> {
    match &words.source_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(EmbeddedSource::new(EMBEDDED_WORDS_NAME, EMBEDDED_WORDS)),
    }
}
