//! Selection history used to avoid repeating subjects.
//!
//! Stored as one JSON document mapping category to subject to the date it
//! was last used:
//!
//! ```text
//! { "car": { "Audi RS4": "2026-10-01" }, "character": { "Vito": "2026-09-12" } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::RECENCY_WINDOW_DAYS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionHistory {
    entries: HashMap<String, HashMap<String, NaiveDate>>,
}

impl SelectionHistory {
    pub fn last_used(&self, category: &str, subject: &str) -> Option<NaiveDate> {
        self.entries.get(category)?.get(subject).copied()
    }

    pub fn record(&mut self, category: &str, subject: &str, date: NaiveDate) {
        self.entries
            .entry(category.to_string())
            .or_default()
            .insert(subject.to_string(), date);
    }

    pub fn reset(&mut self, category: &str) {
        self.entries.remove(category);
    }

    /// Whether `subject` was used within the recency window ending `today`.
    pub fn is_recent(&self, category: &str, subject: &str, today: NaiveDate) -> bool {
        self.last_used(category, subject)
            .is_some_and(|date| today.signed_duration_since(date).num_days() <= RECENCY_WINDOW_DAYS)
    }

    /// Candidates not used within the recency window. When every candidate
    /// is recent the category's history is cleared and the full pool is
    /// returned.
    pub fn fresh<'a>(
        &mut self,
        category: &str,
        pool: &'a [String],
        today: NaiveDate,
    ) -> Vec<&'a String> {
        let fresh: Vec<&String> = pool
            .iter()
            .filter(|subject| !self.is_recent(category, subject, today))
            .collect();

        if fresh.is_empty() && !pool.is_empty() {
            info!("Every {} was used recently, resetting its history", category);
            self.reset(category);
            return pool.iter().collect();
        }

        fresh
    }
}

/// Loads and saves a [`SelectionHistory`] as a single JSON file.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Absent, unreadable or corrupt files load as an empty history.
    pub fn load(&self) -> SelectionHistory {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return SelectionHistory::default(),
            Err(e) => {
                warn!("Failed to read history {}: {}", self.path.display(), e);
                return SelectionHistory::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!("Ignoring corrupt history {}: {}", self.path.display(), e);
            SelectionHistory::default()
        })
    }

    pub fn save(&self, history: &SelectionHistory) {
        let result = serde_json::to_string_pretty(history)
            .map_err(io::Error::from)
            .and_then(|json| fs::write(&self.path, json));

        if let Err(e) = result {
            warn!("Failed to save history {}: {}", self.path.display(), e);
        }
    }
}
