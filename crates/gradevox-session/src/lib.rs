//! Batch-entry sessions for GradeVox
//!
//! One recording session holds an ordered list of tentative
//! (student, score) entries built from recognized speech. The
//! [`processor::UtteranceProcessor`] turns each utterance into entries via
//! split -> parse -> match; the [`session::BatchSession`] owns the entries
//! and their review lifecycle (edit, confirm, remove). Nothing here
//! persists; a session lives only for one recording dialog.

pub mod entry;
pub mod processor;
pub mod session;

pub use entry::{BatchVoiceEntry, EntryStatus};
pub use processor::{UtteranceOutcome, UtteranceProcessor};
pub use session::{BatchSession, SessionError, SessionSummary};
