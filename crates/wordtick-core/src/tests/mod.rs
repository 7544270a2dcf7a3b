use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wordtick_config::words::WordsConfig;

use crate::clock::ManualClock;
use crate::cycler::VocabularyCycler;
use crate::error::SourceError;
use crate::source::VocabularySource;

mod parser_tests;

pub(crate) const TWELVE_WORDS: &str = "\
abandon\təˈbændən\təˈbændən\t放弃，抛弃，放纵
ability\təˈbɪləti\təˈbɪləti\t能力，才能
able\tˈeɪbl\tˈeɪbl\t能够的，有能力的
abnormal\tæbˈnɔːml\tæbˈnɔːrml\t反常的，变态的
aboard\təˈbɔːd\təˈbɔːrd\t在船上，在飞机上
abroad\təˈbrɔːd\təˈbrɔːd\t在国外，到国外
absence\tˈæbsəns\tˈæbsəns\t缺席，不在
absolute\tˈæbsəluːt\tˈæbsəluːt\t绝对的，完全的
absorb\təbˈzɔːb\təbˈzɔːrb\t吸收，吸引
abstract\tˈæbstrækt\tˈæbstrækt\t抽象的，摘要
abundant\təˈbʌndənt\təˈbʌndənt\t丰富的，大量的
academic\tˌækəˈdemɪk\tˌækəˈdemɪk\t学术的，学院的
";

/// Source whose contents tests can swap out, counting load attempts
#[derive(Clone, Default)]
pub(crate) struct TestSource {
    data: Rc<RefCell<Option<Vec<u8>>>>,
    attempts: Rc<Cell<usize>>,
}

impl TestSource {
    pub(crate) fn with_text(text: &str) -> Self {
        Self::with_bytes(text.as_bytes().to_vec())
    }

    pub(crate) fn with_bytes(bytes: Vec<u8>) -> Self {
        let source = Self::default();
        source.replace(Some(bytes));
        source
    }

    pub(crate) fn unavailable() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&self, bytes: Option<Vec<u8>>) {
        *self.data.borrow_mut() = bytes;
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl VocabularySource for TestSource {
    fn name(&self) -> &str {
        "test"
    }

    fn load(&self) -> Result<Cow<'_, [u8]>, SourceError> {
        self.attempts.set(self.attempts.get() + 1);
        match self.data.borrow().as_ref() {
            Some(bytes) => Ok(Cow::Owned(bytes.clone())),
            None => Err(SourceError::Unavailable("test".to_string())),
        }
    }
}

pub(crate) fn enabled_config(interval_sec: i32) -> WordsConfig {
    WordsConfig {
        display_enabled: true,
        switch_interval_sec: interval_sec,
        ..WordsConfig::default()
    }
}

pub(crate) fn cycler_at(
    source: TestSource,
    start_ms: u64,
    config: WordsConfig,
) -> (VocabularyCycler<TestSource, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start_ms);
    let cycler = VocabularyCycler::new(source, clock.clone(), config);
    (cycler, clock)
}
