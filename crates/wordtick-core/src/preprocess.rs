use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

pub trait Preprocessor {
    // Default: decode by BOM, then NFC
    fn process(&self, raw: &[u8]) -> String {
        let text = decode(raw);

        // Composition only. NFKC would fold full-width punctuation in translations.
        text.nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Decode a raw resource buffer into text.
///
/// UTF-16 is only recognised by its byte order mark; everything else is read
/// as UTF-8 with invalid sequences replaced.
pub fn decode(raw: &[u8]) -> String {
    if let Some(rest) = raw.strip_prefix(UTF8_BOM) {
        return decode_utf8(rest);
    }
    if let Some(rest) = raw.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = raw.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    decode_utf8(raw)
}

fn decode_utf8(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_owned(),
        Cow::Owned(text) => {
            tracing::debug!("Replaced invalid UTF-8 sequences in vocabulary buffer");
            text
        }
    }
}

fn decode_utf16(bytes: &[u8], read_unit: fn([u8; 2]) -> u16) -> String {
    if bytes.len() % 2 != 0 {
        tracing::debug!("Dropping trailing odd byte in UTF-16 vocabulary buffer");
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| read_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16_with_bom(text: &str, little_endian: bool) -> Vec<u8> {
        let mut bytes = if little_endian {
            UTF16_LE_BOM.to_vec()
        } else {
            UTF16_BE_BOM.to_vec()
        };
        for unit in text.encode_utf16() {
            let pair = if little_endian {
                unit.to_le_bytes()
            } else {
                unit.to_be_bytes()
            };
            bytes.extend_from_slice(&pair);
        }
        bytes
    }

    #[test]
    fn strips_utf8_bom() {
        let mut raw = UTF8_BOM.to_vec();
        raw.extend_from_slice("abandon\t放弃".as_bytes());
        assert_eq!(decode(&raw), "abandon\t放弃");
    }

    #[test]
    fn decodes_utf16_both_endians() {
        let text = "ability\təˈbɪləti\t能力，才能";
        assert_eq!(decode(&utf16_with_bom(text, true)), text);
        assert_eq!(decode(&utf16_with_bom(text, false)), text);
    }

    #[test]
    fn replaces_invalid_utf8() {
        let raw = [b'a', 0xFF, b'b'];
        assert_eq!(decode(&raw), "a\u{FFFD}b");
    }

    #[test]
    fn composes_but_keeps_full_width_punctuation() {
        // "e" + combining acute composes to "é"; the full-width comma survives
        let raw = "cafe\u{301}\t咖啡，小餐馆".as_bytes();
        assert_eq!(DefaultPreprocessor.process(raw), "café\t咖啡，小餐馆");
    }
}
