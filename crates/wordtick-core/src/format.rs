//! Clock suffix composition and the bounded output boundary.

use std::borrow::Cow;

use wordtick_config::words::WordsConfig;
use wordtick_types::{PhoneticMode, VocabularyEntry};

/// Keeps the time readable
pub const LEADING_SEPARATOR: &str = "  ";
pub const TRANSLATION_SEPARATOR: &str = " · ";
pub const ELLIPSIS: char = '…';

/// Upper bound on kept translation characters when truncating, whatever the configured limit
pub const TRANSLATION_STAGING_MAX: usize = 240;

/// Display flags that shape the suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub show_phonetic: bool,
    pub phonetic_mode: PhoneticMode,
    pub show_chinese: bool,
    /// `None` is unlimited
    pub chinese_limit: Option<usize>,
}

impl From<&WordsConfig> for FormatOptions {
    fn from(config: &WordsConfig) -> Self {
        Self {
            show_phonetic: config.show_phonetic,
            phonetic_mode: config.phonetic_mode,
            show_chinese: config.show_chinese,
            chinese_limit: config.chinese_limit(),
        }
    }
}

/// Build the full suffix, e.g. `"  abandon [əˈbændən] · 放弃…"`
pub fn compose_suffix(entry: &VocabularyEntry, options: &FormatOptions) -> String {
    let mut out = String::from(LEADING_SEPARATOR);
    out.push_str(&entry.headword);

    if options.show_phonetic {
        if options.phonetic_mode.shows_uk() {
            push_phonetic(&mut out, &entry.uk);
        }
        if options.phonetic_mode.shows_us() {
            push_phonetic(&mut out, &entry.us);
        }
    }

    if options.show_chinese && !entry.translation.is_empty() {
        out.push_str(TRANSLATION_SEPARATOR);
        out.push_str(&truncate_translation(&entry.translation, options.chinese_limit));
    }

    out
}

fn push_phonetic(out: &mut String, phonetic: &str) {
    if phonetic.is_empty() {
        return;
    }
    out.push_str(" [");
    out.push_str(phonetic);
    out.push(']');
}

/// Cut to `limit` characters and mark the cut with an ellipsis.
///
/// Text within the limit is kept whole. A cut keeps at most
/// [`TRANSLATION_STAGING_MAX`] characters.
pub fn truncate_translation(text: &str, limit: Option<usize>) -> Cow<'_, str> {
    let Some(limit) = limit else {
        return Cow::Borrowed(text);
    };
    if text.chars().nth(limit).is_none() {
        return Cow::Borrowed(text);
    }

    let keep = limit.min(TRANSLATION_STAGING_MAX);
    let mut truncated = char_prefix(text, keep).to_string();
    truncated.push(ELLIPSIS);
    Cow::Owned(truncated)
}

/// The first `count` characters of `text`
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Clamp to a buffer of `capacity` characters, one of which is the terminator
pub fn clamp_to_capacity(text: &str, capacity: usize) -> &str {
    char_prefix(text, capacity.saturating_sub(1))
}

/// Write `text` as NUL-terminated UTF-16 into `out`, truncating at a character boundary.
///
/// Returns the number of code units written before the terminator. An empty
/// buffer is left untouched.
pub fn write_utf16(text: &str, out: &mut [u16]) -> usize {
    let Some(limit) = out.len().checked_sub(1) else {
        return 0;
    };

    let mut written = 0;
    let mut units = [0u16; 2];
    for ch in text.chars() {
        let encoded = ch.encode_utf16(&mut units);
        if written + encoded.len() > limit {
            break;
        }
        out[written..written + encoded.len()].copy_from_slice(encoded);
        written += encoded.len();
    }

    out[written] = 0;
    written
}
