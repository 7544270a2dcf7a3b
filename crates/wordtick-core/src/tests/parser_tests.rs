use wordtick_types::VocabularyEntry;

use super::TWELVE_WORDS;
use crate::error::ParseError;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::vocabulary::{MIN_LINES, VocabularyList};

#[test]
fn twelve_line_buffer_parses_in_order() {
    let list = VocabularyList::parse_tsv(TWELVE_WORDS).unwrap();
    assert_eq!(list.len(), 12);

    let headwords: Vec<&str> = list.iter().map(|e| e.headword.as_str()).collect();
    assert_eq!(headwords.first(), Some(&"abandon"));
    assert_eq!(headwords.last(), Some(&"academic"));

    assert_eq!(
        list.get(0),
        Some(&VocabularyEntry::new(
            "abandon",
            "əˈbændən",
            "əˈbændən",
            "放弃，抛弃，放纵"
        ))
    );
    assert_eq!(list.get(3).unwrap().us, "æbˈnɔːrml");
}

#[test]
fn fields_are_trimmed() {
    let text = TWELVE_WORDS.replacen("ability\t", "  ability \t ", 1).replace('\n', "\r\n");
    let list = VocabularyList::parse_tsv(&text).unwrap();
    let entry = list.get(1).unwrap();
    assert_eq!(entry.headword, "ability");
    assert_eq!(entry.uk, "əˈbɪləti");
    assert_eq!(entry.translation, "能力，才能");
}

#[test]
fn fewer_than_ten_lines_is_rejected() {
    let nine: String = TWELVE_WORDS.lines().take(9).map(|l| format!("{l}\n")).collect();
    assert_eq!(
        VocabularyList::parse_tsv(&nine),
        Err(ParseError::TooFewLines {
            found: 9,
            required: MIN_LINES
        })
    );
    assert!(VocabularyList::parse_tsv("").is_err());
}

#[test]
fn ten_lines_without_trailing_newline_are_accepted() {
    let ten = TWELVE_WORDS.lines().take(10).collect::<Vec<_>>().join("\n");
    assert_eq!(VocabularyList::parse_tsv(&ten).unwrap().len(), 10);
}

#[test]
fn blank_headwords_contribute_no_entry() {
    let mut lines: Vec<String> = TWELVE_WORDS.lines().map(str::to_string).collect();
    lines[2] = "\tˈeɪbl\tˈeɪbl\t能够的".to_string();
    lines[7] = "   ".to_string();
    let text = lines.join("\n");

    let list = VocabularyList::parse_tsv(&text).unwrap();
    assert_eq!(list.len(), 10);
    assert!(list.iter().all(|e| e.headword != "able" && e.headword != "absolute"));
}

#[test]
fn only_blank_lines_is_rejected() {
    let text = "\n".repeat(15);
    assert_eq!(VocabularyList::parse_tsv(&text), Err(ParseError::NoEntries));
}

#[test]
fn short_lines_keep_empty_fields() {
    let text = format!("lonely\n{}", "\n".repeat(10));
    let list = VocabularyList::parse_tsv(&text).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(&VocabularyEntry::new("lonely", "", "", "")));
}

#[test]
fn bom_prefixed_buffer_parses_like_plain_text() {
    let mut raw = vec![0xEF, 0xBB, 0xBF];
    raw.extend_from_slice(TWELVE_WORDS.as_bytes());
    let text = DefaultPreprocessor.process(&raw);

    let with_bom = VocabularyList::parse_tsv(&text).unwrap();
    let plain = VocabularyList::parse_tsv(TWELVE_WORDS).unwrap();
    assert_eq!(with_bom, plain);
}
