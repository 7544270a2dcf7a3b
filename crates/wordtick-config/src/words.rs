use serde::{Deserialize, Serialize};
use wordtick_types::PhoneticMode;

fn default_display_enabled() -> bool {
    false
}

fn default_switch_interval_sec() -> i32 {
    20
}

fn default_show_phonetic() -> bool {
    true
}

fn default_show_chinese() -> bool {
    true
}

fn default_chinese_max_len() -> i32 {
    10
}

fn default_retry_failed_load() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WordsConfig {
    /// Append the current word to the clock text
    #[serde(default = "default_display_enabled")]
    pub display_enabled: bool,
    /// Seconds between automatic switches. 0 or less disables auto-switch.
    #[serde(default = "default_switch_interval_sec")]
    pub switch_interval_sec: i32,
    #[serde(default = "default_show_phonetic")]
    pub show_phonetic: bool,
    #[serde(default)]
    pub phonetic_mode: PhoneticMode,
    /// Show the (short) Chinese translation
    #[serde(default = "default_show_chinese")]
    pub show_chinese: bool,
    /// Max characters of translation. 0 or less means unlimited.
    #[serde(default = "default_chinese_max_len")]
    pub chinese_max_len: i32,
    /// Retry a failed vocabulary load on every lazy init, not just the first
    #[serde(default = "default_retry_failed_load")]
    pub retry_failed_load: bool,
    /// TSV file to use instead of the embedded word list
    #[serde(default)]
    pub source_path: Option<String>,
}

impl WordsConfig {
    /// Switch interval in milliseconds, `None` when auto-switch is off
    pub fn switch_interval_ms(&self) -> Option<u64> {
        if self.switch_interval_sec > 0 {
            Some(self.switch_interval_sec as u64 * 1000)
        } else {
            None
        }
    }

    /// Translation length limit in characters, `None` when unlimited
    pub fn chinese_limit(&self) -> Option<usize> {
        if self.chinese_max_len > 0 {
            Some(self.chinese_max_len as usize)
        } else {
            None
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            display_enabled: default_display_enabled(),
            switch_interval_sec: default_switch_interval_sec(),
            show_phonetic: default_show_phonetic(),
            phonetic_mode: PhoneticMode::default(),
            show_chinese: default_show_chinese(),
            chinese_max_len: default_chinese_max_len(),
            retry_failed_load: default_retry_failed_load(),
            source_path: None,
        }
    }
}
