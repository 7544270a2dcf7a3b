use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One vocabulary record. Missing fields are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabularyEntry {
    pub headword: String,
    pub uk: String,
    pub us: String,
    pub translation: String,
}

impl VocabularyEntry {
    pub fn new(
        headword: impl Into<String>,
        uk: impl Into<String>,
        us: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            uk: uk.into(),
            us: us.into(),
            translation: translation.into(),
        }
    }
}

/// Which phonetic transcription(s) to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneticMode {
    #[default]
    #[serde(alias = "UK")]
    Uk,
    #[serde(alias = "US")]
    Us,
    #[serde(alias = "BOTH")]
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown phonetic mode '{0}', expected uk, us or both")]
pub struct ParsePhoneticModeError(String);

impl FromStr for PhoneticMode {
    type Err = ParsePhoneticModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UK" => Ok(PhoneticMode::Uk),
            "US" => Ok(PhoneticMode::Us),
            "BOTH" => Ok(PhoneticMode::Both),
            _ => Err(ParsePhoneticModeError(s.to_string())),
        }
    }
}

impl PhoneticMode {
    pub fn shows_uk(&self) -> bool {
        matches!(self, PhoneticMode::Uk | PhoneticMode::Both)
    }

    pub fn shows_us(&self) -> bool {
        matches!(self, PhoneticMode::Us | PhoneticMode::Both)
    }
}

/// Events sent from the ticker to the display side of a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Current suffix text; empty when nothing should be shown
    Suffix(String),
    Shutdown,
}

/// Commands from the input side of a host to the ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    NextWord,
    ToggleDisplay,
}
