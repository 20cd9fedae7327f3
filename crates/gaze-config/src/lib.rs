use gaze_types::TriggerMode;
use serde::{Deserialize, Serialize};

use self::ocr::OcrConfig;
use self::translator::TranslatorConfig;

pub mod ocr;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// Mouse gesture that opens a selection. Read at gesture-evaluation
    /// time; changing it takes effect on restart.
    pub trigger: TriggerMode,
    pub ocr: OcrConfig,
    pub translator: TranslatorConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.translator.apply_env_overrides();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trigger, TriggerMode::MiddleMouse);
        assert_eq!(back.translator.to_lang, "zh");
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let back: Config = serde_json::from_str(r#"{"trigger":"RightMouse"}"#).unwrap();
        assert_eq!(back.trigger, TriggerMode::RightMouse);
        assert_eq!(back.ocr.language, "auto");
    }
}
