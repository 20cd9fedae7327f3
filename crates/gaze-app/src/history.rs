use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct TranslationRecord {
    pub original: String,
    pub translated: String,
    pub timestamp: SystemTime,
}

/// Append-only translation history, newest first, persisted as pretty JSON.
///
/// Writes are best-effort: the pipeline never fails because the history
/// file could not be written.
pub struct HistoryLog {
    path: PathBuf,
    cache: Mutex<Vec<TranslationRecord>>,
}

impl HistoryLog {
    fn cache(&self) -> std::sync::MutexGuard<'_, Vec<TranslationRecord>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Missing or unreadable files start an empty history.
    pub fn load(path: PathBuf) -> Self {
        let cache = fs::read_to_string(&path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    pub fn append(&self, original: &str, translated: &str) {
        let record = TranslationRecord {
            original: original.to_string(),
            translated: translated.to_string(),
            timestamp: SystemTime::now(),
        };
        let snapshot = {
            let mut cache = self.cache();
            cache.insert(0, record);
            cache.clone()
        };
        self.save(&snapshot);
    }

    pub fn records(&self) -> Vec<TranslationRecord> {
        self.cache().clone()
    }

    pub fn delete(&self, index: usize) {
        let snapshot = {
            let mut cache = self.cache();
            if index >= cache.len() {
                return;
            }
            cache.remove(index);
            cache.clone()
        };
        self.save(&snapshot);
    }

    pub fn clear(&self) {
        self.cache().clear();
        self.save(&[]);
    }

    fn save(&self, records: &[TranslationRecord]) {
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
            Ok(())
        };
        if let Err(e) = write() {
            tracing::warn!("failed to write history file: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_persist_across_reloads_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let log = HistoryLog::load(path.clone());
        log.append("Hello", "你好");
        log.append("World", "世界");

        let reloaded = HistoryLog::load(path);
        let records = reloaded.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].original, "World");
        assert_eq!(records[1].translated, "你好");
    }

    #[test]
    fn missing_or_corrupt_files_start_empty() {
        let dir = tempfile::tempdir().unwrap();

        let log = HistoryLog::load(dir.path().join("does-not-exist.json"));
        assert!(log.records().is_empty());

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "not json").unwrap();
        let log = HistoryLog::load(garbled);
        assert!(log.records().is_empty());
    }

    #[test]
    fn delete_and_clear_rewrite_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let log = HistoryLog::load(path.clone());
        log.append("a", "1");
        log.append("b", "2");
        log.delete(0);
        assert_eq!(log.records()[0].original, "a");
        // Out-of-range deletes are ignored.
        log.delete(5);

        log.clear();
        assert!(log.records().is_empty());
        assert!(HistoryLog::load(path).records().is_empty());
    }
}
