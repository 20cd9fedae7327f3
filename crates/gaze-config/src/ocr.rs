use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "auto".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Language hint passed to the recognition backend ("auto", "zh", "jp",
    /// "en", "kor").
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}
