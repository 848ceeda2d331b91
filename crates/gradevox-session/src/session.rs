//! In-memory state for one voice recording session.

use crate::entry::{BatchVoiceEntry, EntryStatus};
use gradevox_match::{StudentData, StudentMatch, StudentMatcher};
use gradevox_telemetry::SessionMetrics;
use serde::Serialize;
use std::sync::atomic::Ordering;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no batch entry with id {id}")]
    EntryNotFound { id: u64 },

    #[error("entry {id} has no resolved student to confirm")]
    UnresolvedStudent { id: u64 },
}

/// Counts over the current session, as shown in the review UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub total: usize,
    pub valid_entries: usize,
    pub invalid_entries: usize,
    pub confirmed_entries: usize,
}

/// Ordered list of tentative entries for one recording dialog.
///
/// The session is the single owner of its entries and of id allocation;
/// all mutation goes through it. It holds no persistence and is dropped
/// with the dialog.
#[derive(Debug)]
pub struct BatchSession {
    entries: Vec<BatchVoiceEntry>,
    next_id: u64,
    metrics: SessionMetrics,
}

impl Default for BatchSession {
    fn default() -> Self {
        Self::new(SessionMetrics::default())
    }
}

impl BatchSession {
    pub fn new(metrics: SessionMetrics) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            metrics,
        }
    }

    /// Append a freshly parsed segment, classifying it immediately.
    ///
    /// The entry starts `Pending` and becomes `Validated` when an
    /// acceptable match is supplied, `Invalid` otherwise. Returns the
    /// assigned id.
    pub fn add(
        &mut self,
        recognized_text: String,
        parsed_name: Option<String>,
        parsed_score: Option<String>,
        best_match: Option<&StudentMatch>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let mut entry = BatchVoiceEntry {
            id,
            recognized_text,
            parsed_name,
            parsed_score,
            matched_student: None,
            confidence: 0.0,
            status: EntryStatus::Pending,
            is_valid_student: false,
        };

        match best_match {
            Some(m) => {
                entry.matched_student = Some(m.full_name.clone());
                entry.confidence = m.similarity;
                entry.is_valid_student = true;
                entry.status = EntryStatus::Validated;
                self.metrics.entries_validated.fetch_add(1, Ordering::Relaxed);
            }
            None => {
                entry.status = EntryStatus::Invalid;
                self.metrics.entries_invalid.fetch_add(1, Ordering::Relaxed);
            }
        }

        debug!(
            target: "session",
            id,
            status = %entry.status,
            student = ?entry.matched_student,
            "entry added"
        );
        self.entries.push(entry);
        id
    }

    /// Manually correct an entry's name and (optionally) its score.
    ///
    /// The matcher is re-run with the corrected name. A previously
    /// `Invalid` entry that now resolves becomes `Validated`; an already
    /// valid entry becomes `Edited`; a name that still doesn't resolve
    /// leaves the entry `Invalid`.
    pub fn edit(
        &mut self,
        id: u64,
        name: &str,
        score: Option<&str>,
        matcher: &StudentMatcher,
        roster: &[StudentData],
    ) -> Result<EntryStatus, SessionError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(SessionError::EntryNotFound { id })?;

        let was_invalid = entry.status == EntryStatus::Invalid;
        entry.parsed_name = Some(name.to_string());
        if let Some(score) = score {
            entry.parsed_score = Some(score.to_string());
        }

        let matches = matcher.find_matches(name, roster);
        match matches.first() {
            Some(best) => {
                entry.matched_student = Some(best.full_name.clone());
                entry.confidence = best.similarity;
                entry.is_valid_student = true;
                entry.status = if was_invalid {
                    EntryStatus::Validated
                } else {
                    EntryStatus::Edited
                };
            }
            None => {
                entry.matched_student = None;
                entry.confidence = 0.0;
                entry.is_valid_student = false;
                entry.status = EntryStatus::Invalid;
            }
        }

        let status = entry.status;
        debug!(target: "session", id, status = %status, "entry edited");
        self.metrics.entries_edited.fetch_add(1, Ordering::Relaxed);
        Ok(status)
    }

    /// Confirm an entry for saving.
    ///
    /// Only `Validated` or `Edited` entries with a resolved student can be
    /// confirmed. Confirming an already confirmed entry is a no-op.
    pub fn confirm(&mut self, id: u64) -> Result<(), SessionError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(SessionError::EntryNotFound { id })?;

        match entry.status {
            EntryStatus::Confirmed => Ok(()),
            EntryStatus::Validated | EntryStatus::Edited
                if entry.is_valid_student && entry.matched_student.is_some() =>
            {
                entry.status = EntryStatus::Confirmed;
                debug!(target: "session", id, "entry confirmed");
                self.metrics.entries_confirmed.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            _ => Err(SessionError::UnresolvedStudent { id }),
        }
    }

    /// Remove an entry from the session.
    pub fn remove(&mut self, id: u64) -> Result<BatchVoiceEntry, SessionError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(SessionError::EntryNotFound { id })?;
        let entry = self.entries.remove(idx);
        debug!(target: "session", id, "entry removed");
        self.metrics.entries_removed.fetch_add(1, Ordering::Relaxed);
        Ok(entry)
    }

    pub fn entries(&self) -> &[BatchVoiceEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&BatchVoiceEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts for the review UI.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.entries.len(),
            valid_entries: self
                .entries
                .iter()
                .filter(|e| e.is_valid_student)
                .count(),
            invalid_entries: self
                .entries
                .iter()
                .filter(|e| e.status == EntryStatus::Invalid)
                .count(),
            confirmed_entries: self
                .entries
                .iter()
                .filter(|e| e.status == EntryStatus::Confirmed)
                .count(),
        }
    }

    /// True when every entry is `Confirmed`, or `Validated` with a
    /// resolved student. An empty session has nothing to save.
    pub fn ready_to_save(&self) -> bool {
        !self.entries.is_empty()
            && self.entries.iter().all(|e| {
                e.status == EntryStatus::Confirmed
                    || (e.status == EntryStatus::Validated && e.matched_student.is_some())
            })
    }

    /// Cancel the session: drop all entries, keep id allocation monotonic.
    pub fn clear(&mut self) {
        debug!(target: "session", dropped = self.entries.len(), "session cleared");
        self.entries.clear();
    }
}
