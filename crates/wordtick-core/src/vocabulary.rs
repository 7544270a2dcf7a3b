use wordtick_types::VocabularyEntry;

use crate::error::ParseError;

/// Buffers with fewer lines than this are treated as truncated or corrupt.
///
/// Lines are counted as [`str::lines`] yields them, so a last line without a
/// trailing newline counts: ten records with only nine `\n` characters pass.
/// Counting `\n` characters instead would reject that buffer.
pub const MIN_LINES: usize = 10;

/// headword, UK phonetic, US phonetic, translation
pub const FIELD_COUNT: usize = 4;

/// Ordered, non-empty list of vocabulary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyList {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyList {
    pub fn new(entries: Vec<VocabularyEntry>) -> Result<Self, ParseError> {
        if entries.is_empty() {
            return Err(ParseError::NoEntries);
        }
        Ok(Self { entries })
    }

    /// Parse tab-separated text, one entry per line.
    ///
    /// The whole buffer is rejected when it has fewer than [`MIN_LINES`] lines
    /// (blank lines included) or when no line has a headword.
    pub fn parse_tsv(text: &str) -> Result<Self, ParseError> {
        let found = text.lines().count();
        if found < MIN_LINES {
            return Err(ParseError::TooFewLines {
                found,
                required: MIN_LINES,
            });
        }

        let entries = text.lines().filter_map(parse_line).collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed list
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VocabularyEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }
}

fn parse_line(line: &str) -> Option<VocabularyEntry> {
    // Tabs past the last field stay inside the translation
    let mut fields = line.splitn(FIELD_COUNT, '\t').map(trim_field);

    let headword = fields.next().filter(|headword| !headword.is_empty())?;
    let uk = fields.next().unwrap_or_default();
    let us = fields.next().unwrap_or_default();
    let translation = fields.next().unwrap_or_default();

    Some(VocabularyEntry::new(headword, uk, us, translation))
}

fn trim_field(field: &str) -> &str {
    field.trim_matches([' ', '\t', '\r', '\n'])
}
