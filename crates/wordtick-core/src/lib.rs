pub mod clock;
pub mod cursor;
pub mod cycler;
pub mod error;
pub mod format;
pub mod preprocess;
pub mod source;
pub mod vocabulary;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use cycler::VocabularyCycler;
pub use error::{LoadError, ParseError, SourceError};
pub use format::FormatOptions;
pub use source::{EmbeddedSource, FileSource, VocabularySource};
pub use vocabulary::VocabularyList;

#[cfg(test)]
mod tests;
