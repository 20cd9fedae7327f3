use std::env;
use std::fs;
use std::path::PathBuf;

use gaze_config::Config;

/// Roaming application-data folder; `APPDATA` on Windows, home-relative
/// fallback elsewhere.
fn roaming_dir() -> PathBuf {
    if let Some(appdata) = env::var_os("APPDATA") {
        return PathBuf::from(appdata);
    }
    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn app_data_dir() -> PathBuf {
    roaming_dir().join("Gaze")
}

pub fn history_path() -> PathBuf {
    app_data_dir().join("history.json")
}

/// Load settings from the roaming `config.json`, falling back to defaults
/// when the file is missing or unreadable. Credential environment
/// variables override either way.
pub fn load_config() -> Config {
    let path = app_data_dir().join("config.json");

    let mut config = match fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str::<Config>(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("malformed config at {}: {e}; using defaults", path.display());
                Config::default()
            }
        },
        Err(_) => {
            tracing::info!("no config at {}, using defaults", path.display());
            Config::default()
        }
    };

    config.translator.apply_env_overrides();
    config
}
