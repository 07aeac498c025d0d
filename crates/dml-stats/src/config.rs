use serde::{Deserialize, Serialize};

/// Layout of the `head` / `tail` previews.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Minimum field width; values are right-aligned.
    pub width: usize,
    pub head_precision: usize,
    pub tail_precision: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 10,
            head_precision: 3,
            tail_precision: 2,
        }
    }
}

/// Options for `random_data_stream`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    /// Fixed seed for reproducible streams. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

/// Options for the delimited-text loader.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    /// Field delimiter. When `None` it is inferred from the file extension.
    pub delimiter: Option<char>,
    pub has_headers: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_headers: true,
        }
    }
}
