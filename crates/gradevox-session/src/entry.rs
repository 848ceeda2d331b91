//! Tentative batch entries and their lifecycle states.

use serde::Serialize;

/// Review state of one batch entry.
///
/// Invariant: `Invalid` iff no student match exceeded the acceptance
/// threshold for the entry's current name. `Confirmed` is reachable only
/// from `Validated` or `Edited` with a resolved student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    /// Freshly parsed, not yet classified
    Pending,
    /// Best roster match was acceptable
    Validated,
    /// Accepted by the user, ready to commit
    Confirmed,
    /// Manually corrected by the user
    Edited,
    /// No roster match above the acceptance threshold
    Invalid,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Pending => write!(f, "PENDING"),
            EntryStatus::Validated => write!(f, "VALIDATED"),
            EntryStatus::Confirmed => write!(f, "CONFIRMED"),
            EntryStatus::Edited => write!(f, "EDITED"),
            EntryStatus::Invalid => write!(f, "INVALID"),
        }
    }
}

/// One (student, score) candidate awaiting review.
///
/// Created per parsed utterance segment, mutated by edit/confirm, and
/// destroyed when the session is saved or cancelled.
#[derive(Debug, Clone, Serialize)]
pub struct BatchVoiceEntry {
    /// Session-unique id
    pub id: u64,
    /// Raw recognized text for this segment
    pub recognized_text: String,
    /// Name fragment the parser extracted
    pub parsed_name: Option<String>,
    /// Score the parser extracted, verbatim as spoken
    pub parsed_score: Option<String>,
    /// Full name of the best roster match, when one was acceptable
    pub matched_student: Option<String>,
    /// Similarity of the best match, 0.0 when there was none
    pub confidence: f32,
    pub status: EntryStatus,
    pub is_valid_student: bool,
}
