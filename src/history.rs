use crate::types::{ContentCategory, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub title: String,
    pub category: ContentCategory,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    published_titles: HashMap<String, HistoryRecord>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

/// Persistent record of everything already published, keyed by a
/// fingerprint of the normalized title. Mutations stay in memory until
/// [`save`](HistoryStore::save), so a failed run re-offers its content on
/// the next attempt.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    data: HistoryFile,
    retention_days: i64,
}

/// Deterministic fingerprint of a normalized (lowercased, trimmed) title.
pub fn fingerprint(title: &str) -> String {
    let normalized = title.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

impl HistoryStore {
    /// Load history from `path`. A missing or corrupt file is a cold
    /// start, never an error.
    pub fn load(path: impl AsRef<Path>, retention_days: i64) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HistoryFile>(&raw) {
                Ok(data) => data,
                Err(e) => {
                    warn!("History file {} is corrupt ({}), starting fresh", path.display(), e);
                    HistoryFile::default()
                }
            },
            Err(_) => {
                debug!("No history file at {}, starting fresh", path.display());
                HistoryFile::default()
            }
        };

        info!(
            "Loaded history with {} published titles",
            data.published_titles.len()
        );
        Self { path, data, retention_days }
    }

    pub fn was_published(&self, title: &str) -> bool {
        self.data.published_titles.contains_key(&fingerprint(title))
    }

    /// Upsert a record with the current timestamp. In-memory only; nothing
    /// is durable until [`save`](Self::save).
    pub fn record(&mut self, title: &str, category: ContentCategory) {
        self.data.published_titles.insert(
            fingerprint(title),
            HistoryRecord {
                title: title.to_string(),
                category,
                date: Utc::now(),
            },
        );
    }

    /// Prune records older than the retention window, stamp the update
    /// time, and write to disk. The only durable mutation point.
    pub fn save(&mut self) -> Result<()> {
        let cutoff = Utc::now() - Duration::days(self.retention_days);
        let before = self.data.published_titles.len();
        self.data.published_titles.retain(|_, record| record.date >= cutoff);
        let pruned = before - self.data.published_titles.len();
        if pruned > 0 {
            info!("Pruned {} history records older than {} days", pruned, self.retention_days);
        }

        self.data.last_updated = Some(Utc::now());
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)?;
        debug!("Saved history to {}", self.path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.published_titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.published_titles.is_empty()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.data.last_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_normalized_and_stable() {
        assert_eq!(fingerprint("  Hello World  "), fingerprint("hello world"));
        assert_ne!(fingerprint("hello world"), fingerprint("hello worlds"));
    }
}
