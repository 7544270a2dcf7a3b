use wordtick_config::words::WordsConfig;
use wordtick_types::VocabularyEntry;

use crate::clock::Clock;
use crate::cursor::CursorState;
use crate::error::{LoadError, Result};
use crate::format::{self, FormatOptions};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::source::VocabularySource;
use crate::vocabulary::VocabularyList;

enum LoadState {
    Unloaded,
    /// A load was attempted and failed; lazy retries depend on `retry_failed_load`
    Failed,
    Loaded {
        list: VocabularyList,
        cursor: CursorState,
    },
}

/// Cycles through a vocabulary list and renders the current word as a clock suffix.
///
/// Every operation is synchronous and expects a single caller, normally the
/// host's periodic update loop. When nothing could be loaded all operations
/// report "unchanged" and format to an empty string.
pub struct VocabularyCycler<S, C> {
    source: S,
    clock: C,
    config: WordsConfig,
    state: LoadState,
}

impl<S: VocabularySource, C: Clock> VocabularyCycler<S, C> {
    pub fn new(source: S, clock: C, config: WordsConfig) -> Self {
        Self {
            source,
            clock,
            config,
            state: LoadState::Unloaded,
        }
    }

    /// Time base shared with the host's tick calls
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &WordsConfig {
        &self.config
    }

    /// Replace the display configuration. A pending deadline is kept as is.
    pub fn set_config(&mut self, config: WordsConfig) {
        self.config = config;
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, LoadState::Loaded { .. })
    }

    /// Number of loaded entries, 0 when nothing is loaded
    pub fn len(&self) -> usize {
        match &self.state {
            LoadState::Loaded { list, .. } => list.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            LoadState::Loaded { cursor, .. } => Some(cursor.index()),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        match &self.state {
            LoadState::Loaded { list, cursor } => list.get(cursor.index()),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        match &self.state {
            LoadState::Loaded { cursor, .. } => cursor.next_deadline(),
            _ => None,
        }
    }

    /// Load the vocabulary. A no-op while already loaded; always retries after a failure.
    pub fn init(&mut self) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }

        match self.load() {
            Ok(list) => {
                let now = self.clock.now_ms();
                let cursor =
                    CursorState::seeded(now, list.len(), now, self.config.switch_interval_ms());
                tracing::info!(
                    "Vocabulary initialized with {} words from {}",
                    list.len(),
                    self.source.name()
                );
                self.state = LoadState::Loaded { list, cursor };
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load vocabulary from {}: {}", self.source.name(), e);
                self.state = LoadState::Failed;
                Err(e)
            }
        }
    }

    fn load(&self) -> Result<VocabularyList> {
        let raw = self.source.load()?;
        let text = DefaultPreprocessor.process(&raw);
        VocabularyList::parse_tsv(&text).map_err(LoadError::from)
    }

    /// Release the list and forget the cursor. Safe to call when never initialized.
    pub fn shutdown(&mut self) {
        if self.is_initialized() {
            tracing::debug!("Vocabulary released");
        }
        self.state = LoadState::Unloaded;
    }

    /// Lazy init used by tick/next/format
    fn ensure_loaded(&mut self) -> Option<(&VocabularyList, &mut CursorState)> {
        let attempt = match self.state {
            LoadState::Unloaded => true,
            LoadState::Failed => self.config.retry_failed_load,
            LoadState::Loaded { .. } => false,
        };
        if attempt {
            // Failure is already logged by init
            let _ = self.init();
        }

        match &mut self.state {
            LoadState::Loaded { list, cursor } => Some((&*list, cursor)),
            _ => None,
        }
    }

    /// Advance when the deadline has passed. Returns true if the current word changed.
    pub fn tick(&mut self, now: u64) -> bool {
        if !self.config.display_enabled {
            return false;
        }
        let interval = self.config.switch_interval_ms();
        let Some((list, cursor)) = self.ensure_loaded() else {
            return false;
        };
        let Some(interval) = interval else {
            return false;
        };

        if cursor.next_deadline().is_none() {
            // Auto-switch was turned on after loading; start counting now
            cursor.reschedule(now, Some(interval));
            return false;
        }
        if !cursor.is_due(now) {
            return false;
        }

        let changed = cursor.advance(list.len());
        cursor.reschedule(now, Some(interval));
        if changed {
            tracing::debug!("Switched to word {}", cursor.index());
        }
        changed
    }

    /// Force the next word regardless of the enabled flag or interval.
    /// Returns true if the current word changed.
    pub fn next(&mut self) -> bool {
        let interval = self.config.switch_interval_ms();
        let now = self.clock.now_ms();
        let Some((list, cursor)) = self.ensure_loaded() else {
            return false;
        };

        let changed = cursor.advance(list.len());
        cursor.reschedule(now, interval);
        changed
    }

    /// Build the suffix for the current word, unbounded
    fn compose(&mut self) -> Option<String> {
        if !self.config.display_enabled {
            return None;
        }
        let options = FormatOptions::from(&self.config);
        let (list, cursor) = self.ensure_loaded()?;
        let entry = list.get(cursor.index())?;
        Some(format::compose_suffix(entry, &options))
    }

    /// Suffix clamped to a buffer of `capacity` characters, terminator included.
    /// Empty when display is off or nothing is loaded.
    pub fn format_suffix(&mut self, capacity: usize) -> String {
        match self.compose() {
            Some(suffix) => format::clamp_to_capacity(&suffix, capacity).to_string(),
            None => String::new(),
        }
    }

    /// Write the suffix into a NUL-terminated wide buffer.
    /// Returns the number of code units before the terminator.
    pub fn format_into(&mut self, out: &mut [u16]) -> usize {
        let suffix = self.compose().unwrap_or_default();
        format::write_utf16(&suffix, out)
    }
}
