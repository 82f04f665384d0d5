//! Capped, append-only log of reported errors.
//!
//! The log is persisted as a JSON array (oldest first) under
//! [`crate::ERROR_LOG_KEY`] after every append.

#[cfg(test)]
#[path = "error_log_test.rs"]
mod error_log_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of records kept; older records are evicted first.
pub const ERROR_LOG_CAPACITY: usize = 100;

/// One reported error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub component: String,
    pub message: String,
    pub code: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub source_file: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorLog {
    records: VecDeque<ErrorRecord>,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record`, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, record: ErrorRecord) {
        self.records.push_back(record);
        while self.records.len() > ERROR_LOG_CAPACITY {
            self.records.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ErrorRecord> {
        self.records.back()
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    /// Parse a persisted log, keeping only the most recent
    /// [`ERROR_LOG_CAPACITY`] records.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON array of records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ErrorRecord> = serde_json::from_str(raw)?;
        let mut log = Self::new();
        for record in records {
            log.push(record);
        }
        Ok(log)
    }
}
