use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Supplies the raw vocabulary buffer. Called once per load attempt.
pub trait VocabularySource {
    /// Name used in log lines and errors
    fn name(&self) -> &str;

    fn load(&self) -> Result<Cow<'_, [u8]>, SourceError>;
}

impl<S: VocabularySource + ?Sized> VocabularySource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Cow<'_, [u8]>, SourceError> {
        (**self).load()
    }
}

/// Resource compiled into the binary, e.g. with `include_bytes!`
pub struct EmbeddedSource {
    name: &'static str,
    data: &'static [u8],
}

impl EmbeddedSource {
    pub const fn new(name: &'static str, data: &'static [u8]) -> Self {
        Self { name, data }
    }
}

impl VocabularySource for EmbeddedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self) -> Result<Cow<'_, [u8]>, SourceError> {
        if self.data.is_empty() {
            return Err(SourceError::Unavailable(self.name.to_string()));
        }
        Ok(Cow::Borrowed(self.data))
    }
}

/// TSV file on disk, read on every load attempt
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularySource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Cow<'_, [u8]>, SourceError> {
        tracing::info!("Loading vocabulary from file: {}", self.path.display());
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SourceError::Unavailable(self.name.clone()))
            }
            Err(source) => Err(SourceError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
