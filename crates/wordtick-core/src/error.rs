use std::path::PathBuf;

/// The raw vocabulary buffer could not be obtained
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Vocabulary resource unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The buffer was obtained but rejected as a whole
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Too few lines: found {found}, need at least {required}")]
    TooFewLines { found: usize, required: usize },

    #[error("No valid entries")]
    NoEntries,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
