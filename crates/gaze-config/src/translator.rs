use std::env;

use serde::{Deserialize, Serialize};

fn default_from_lang() -> String {
    "auto".to_string()
}

fn default_to_lang() -> String {
    "zh".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    /// Environment variables win over the settings file for credentials.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(app_id) = env::var("BAIDU_APP_ID") {
            self.app_id = app_id;
        }
        if let Ok(secret) = env::var("BAIDU_SECRET_KEY") {
            self.secret_key = secret;
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            app_id: String::new(),
            secret_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
