use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counters for one voice-entry pipeline.
///
/// Cloning shares the underlying counters, so the processor, the session,
/// and any display surface observe the same numbers.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    /// Utterances fed to the processor (including the terminating one)
    pub utterances_in: Arc<AtomicU64>,
    /// Segments produced by the utterance splitter
    pub segments_split: Arc<AtomicU64>,
    /// Entries that resolved a student on creation
    pub entries_validated: Arc<AtomicU64>,
    /// Entries with no acceptable roster match on creation
    pub entries_invalid: Arc<AtomicU64>,
    /// Entries confirmed by the user
    pub entries_confirmed: Arc<AtomicU64>,
    /// Manual edits applied to entries
    pub entries_edited: Arc<AtomicU64>,
    /// Entries removed from the session
    pub entries_removed: Arc<AtomicU64>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain copy of the counters for logging or display.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            utterances_in: self.utterances_in.load(Ordering::Relaxed),
            segments_split: self.segments_split.load(Ordering::Relaxed),
            entries_validated: self.entries_validated.load(Ordering::Relaxed),
            entries_invalid: self.entries_invalid.load(Ordering::Relaxed),
            entries_confirmed: self.entries_confirmed.load(Ordering::Relaxed),
            entries_edited: self.entries_edited.load(Ordering::Relaxed),
            entries_removed: self.entries_removed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`SessionMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub utterances_in: u64,
    pub segments_split: u64,
    pub entries_validated: u64,
    pub entries_invalid: u64,
    pub entries_confirmed: u64,
    pub entries_edited: u64,
    pub entries_removed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_counters() {
        let metrics = SessionMetrics::new();
        let other = metrics.clone();
        metrics.segments_split.fetch_add(3, Ordering::Relaxed);
        assert_eq!(other.snapshot().segments_split, 3);
    }

    #[test]
    fn snapshot_starts_at_zero() {
        assert_eq!(SessionMetrics::new().snapshot(), MetricsSnapshot::default());
    }
}
