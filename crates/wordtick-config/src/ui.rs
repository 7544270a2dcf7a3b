use serde::{Deserialize, Serialize};

fn default_suffix_capacity() -> usize {
    128
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Capacity of the clock text buffer the suffix is written into, terminator included
    #[serde(default = "default_suffix_capacity")]
    pub suffix_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            suffix_capacity: default_suffix_capacity(),
        }
    }
}
