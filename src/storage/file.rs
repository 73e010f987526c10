//! File-backed rating storage.
//!
//! Ratings live in a single append-only JSONL log. Two record kinds share
//! the log: a venue's initial rating and a user rating event, distinguished
//! by a `type` tag. Reads replay the whole log; seeding the same venue
//! twice means the later record wins.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{BaselineRating, RatingEvent};
use crate::error::{Result, ToqueError};
use crate::storage::RatingStore;

/// Schema version for rating records.
///
/// Increment when the record schema changes in a breaking way.
pub const RATING_SCHEMA_VERSION: u8 = 1;

/// A rating record as written to the JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingRecord {
    /// Schema version for forward compatibility.
    pub v: u8,
    /// The record kind and its data.
    #[serde(flatten)]
    pub data: RatingRecordKind,
}

impl RatingRecord {
    /// Create a new record at the current schema version.
    pub fn new(data: RatingRecordKind) -> Self {
        Self {
            v: RATING_SCHEMA_VERSION,
            data,
        }
    }
}

/// The kind of rating record and its associated data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RatingRecordKind {
    /// A venue's initial rating.
    InitialRating {
        /// The venue being seeded.
        venue: String,
        /// Initial rating level (1-5).
        rating: u8,
    },

    /// A user rating event.
    UserRating {
        /// The venue being rated.
        venue: String,
        /// Rating level (0-5).
        rating: u8,
        /// The submitting user, when known.
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<String>,
        /// When the rating was recorded.
        ts: DateTime<Utc>,
    },
}

/// File-backed rating store.
///
/// Appends records to a JSONL log, creating the file and its parent
/// directory on first write.
#[derive(Debug, Clone)]
pub struct FileRatingStore {
    /// Path to the ratings log file.
    path: PathBuf,
}

impl FileRatingStore {
    /// Create a store backed by the given log path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the log.
    fn append(&self, record: &RatingRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ToqueError::storage(parent, e))?;
            }
        }

        let json = serde_json::to_string(record)
            .map_err(|e| ToqueError::serde(format!("failed to serialize rating record: {e}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ToqueError::storage(&self.path, e))?;

        writeln!(file, "{json}").map_err(|e| ToqueError::storage(&self.path, e))?;

        Ok(())
    }

    /// Read all records from the log.
    ///
    /// A missing log is an empty log. Blank lines are skipped; a malformed
    /// line fails with its line number so the log can be repaired.
    pub fn read_all(&self) -> Result<Vec<RatingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ToqueError::storage(&self.path, e))?;

        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: RatingRecord = serde_json::from_str(line).map_err(|e| {
                ToqueError::serde(format!(
                    "failed to parse rating record on line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

impl RatingStore for FileRatingStore {
    fn baselines(&self) -> Result<Vec<BaselineRating>> {
        let mut baselines: Vec<BaselineRating> = Vec::new();

        for record in self.read_all()? {
            if let RatingRecordKind::InitialRating { venue, rating } = record.data {
                match baselines.iter_mut().find(|b| b.venue == venue) {
                    Some(existing) => existing.rating = rating,
                    None => baselines.push(BaselineRating { venue, rating }),
                }
            }
        }

        Ok(baselines)
    }

    fn events(&self) -> Result<Vec<RatingEvent>> {
        let mut events = Vec::new();

        for record in self.read_all()? {
            if let RatingRecordKind::UserRating {
                venue,
                rating,
                user,
                ts,
            } = record.data
            {
                events.push(RatingEvent {
                    venue,
                    rating,
                    user,
                    ts,
                });
            }
        }

        Ok(events)
    }

    fn seed(&self, baseline: &BaselineRating) -> Result<()> {
        self.append(&RatingRecord::new(RatingRecordKind::InitialRating {
            venue: baseline.venue.clone(),
            rating: baseline.rating,
        }))
    }

    fn record(&self, event: &RatingEvent) -> Result<()> {
        self.append(&RatingRecord::new(RatingRecordKind::UserRating {
            venue: event.venue.clone(),
            rating: event.rating,
            user: event.user.clone(),
            ts: event.ts,
        }))
    }
}
