use crate::models::HistoryRecord;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "history.json";

/// Ordered lookup history, the in-memory mirror of a JSON array file on disk.
/// Every mutation rewrites the whole file before returning.
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("word2ipa")
            .join(HISTORY_FILE)
    }

    /// Open the store at `path` and load whatever is on disk. A missing,
    /// unreadable or corrupt file loads as an empty history.
    pub fn open(path: PathBuf) -> Self {
        let records = load_all(&path);
        HistoryStore { path, records }
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record (newest first) and rewrite the file.
    pub fn append(&mut self, record: HistoryRecord) -> Result<()> {
        self.records.insert(0, record);
        self.save()
    }

    /// Remove every record whose (word, ipa, lang) triple matches `record`,
    /// then rewrite the file. Duplicate lookups share one triple, so a single
    /// removal drops them all.
    pub fn remove(&mut self, record: &HistoryRecord) -> Result<()> {
        self.records.retain(|r| !r.matches(record));
        self.save()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let s = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, s)?;
        Ok(())
    }
}

fn load_all(path: &Path) -> Vec<HistoryRecord> {
    if !path.exists() {
        return Vec::new();
    }
    let s = fs::read_to_string(path).unwrap_or_default();
    serde_json::from_str(&s).unwrap_or_default()
}
