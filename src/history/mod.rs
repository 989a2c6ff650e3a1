//! Newest-first, capacity-capped logs persisted as JSON arrays.

pub mod records;

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub use records::{
    PronunciationHistory, PronunciationRecord, TranslationHistory, TranslationRecord,
    PRONUNCIATION_HISTORY_CAPACITY, TRANSLATION_HISTORY_CAPACITY,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryLog<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = T>, capacity: usize) -> Self {
        let mut entries: VecDeque<T> = entries.into_iter().collect();
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts at the front; the oldest entries fall off once capacity is exceeded.
    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn entries(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: DeserializeOwned> HistoryLog<T> {
    /// Loads a log from disk.
    ///
    /// A missing file yields an empty log. An unreadable or malformed file is
    /// moved aside to `<name>.corrupt` and also yields an empty log.
    pub fn load(path: &Path, capacity: usize) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no history file yet");
            return Ok(Self::new(capacity));
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read history file {:?}", path))?;
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(entries) => {
                debug!(path = %path.display(), entries = entries.len(), "loaded history");
                Ok(Self::from_entries(entries, capacity))
            }
            Err(err) => {
                let backup = corrupt_path(path);
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "history file is corrupted; starting fresh"
                );
                if let Err(rename_err) = fs::rename(path, &backup) {
                    warn!(
                        path = %path.display(),
                        error = %rename_err,
                        "could not move corrupted history aside; it will be overwritten"
                    );
                }
                Ok(Self::new(capacity))
            }
        }
    }
}

impl<T: Serialize> HistoryLog<T> {
    /// Writes the log as a JSON array via a temporary file and rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create history directory {:?}", parent))?;
        }
        let entries: Vec<&T> = self.entries.iter().collect();
        let content =
            serde_json::to_string_pretty(&entries).context("failed to serialize history")?;
        let temp = path.with_extension("tmp");
        fs::write(&temp, content)
            .with_context(|| format!("failed to write history file {:?}", temp))?;
        fs::rename(&temp, path)
            .with_context(|| format!("failed to move history file into place at {:?}", path))?;
        debug!(path = %path.display(), entries = self.len(), "saved history");
        Ok(())
    }
}

/// Deletes every entry and persists the empty log.
pub fn clear_file<T: Serialize + DeserializeOwned>(path: &Path, capacity: usize) -> Result<usize> {
    ensure!(capacity > 0, "history capacity must be positive");
    let mut log: HistoryLog<T> = HistoryLog::load(path, capacity)?;
    let removed = log.len();
    log.clear();
    log.save(path)?;
    Ok(removed)
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_newest_first_and_caps() {
        let mut log = HistoryLog::new(3);
        for value in 1..=5 {
            log.push(value);
        }
        let values: Vec<i32> = log.entries().copied().collect();
        assert_eq!(values, vec![5, 4, 3]);
        assert_eq!(log.latest(), Some(&5));
    }

    #[test]
    fn from_entries_trims_to_capacity() {
        let log = HistoryLog::from_entries(vec![9, 8, 7, 6], 2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries().copied().collect::<Vec<_>>(), vec![9, 8]);
    }

    #[test]
    fn corrupt_path_appends_suffix() {
        let path = Path::new("/tmp/history.json");
        assert_eq!(corrupt_path(path), PathBuf::from("/tmp/history.json.corrupt"));
    }

    #[test]
    fn corrupt_file_that_cannot_be_moved_still_loads_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json")?;
        let blocker = corrupt_path(&path);
        fs::create_dir(&blocker)?;
        fs::write(blocker.join("keep"), "occupied")?;

        let log = HistoryLog::<i32>::load(&path, 5)?;
        assert!(log.is_empty());
        assert!(path.exists());
        assert!(blocker.is_dir());
        Ok(())
    }
}
