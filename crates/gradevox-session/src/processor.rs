//! Utterance processing: split, parse, match, append.
//!
//! The processor is the synchronous boundary between speech recognition
//! and the session: one recognized utterance in, zero or more classified
//! entries out. Audio capture and recognition callbacks live outside this
//! crate; by the time text reaches [`UtteranceProcessor::process`] no
//! asynchrony remains.

use crate::session::BatchSession;
use gradevox_match::{MatcherConfig, StudentData, StudentMatcher};
use gradevox_parse::{parse, split_segments, SplitterConfig};
use gradevox_telemetry::SessionMetrics;
use std::sync::atomic::Ordering;
use tracing::{debug, info};

/// Outcome of feeding one recognized utterance to the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceOutcome {
    /// Entries were appended (possibly zero); keep listening.
    Continue { appended: usize },
    /// A termination word was heard; the session is complete.
    Terminated,
}

/// Turns recognized utterances into classified batch entries.
pub struct UtteranceProcessor {
    matcher: StudentMatcher,
    splitter: SplitterConfig,
    roster: Vec<StudentData>,
    metrics: SessionMetrics,
}

impl UtteranceProcessor {
    pub fn new(
        matcher_config: MatcherConfig,
        splitter_config: SplitterConfig,
        roster: Vec<StudentData>,
        metrics: SessionMetrics,
    ) -> Self {
        info!(
            target: "voice",
            roster_size = roster.len(),
            threshold = matcher_config.match_threshold,
            "utterance processor ready"
        );
        Self {
            matcher: StudentMatcher::new(matcher_config),
            splitter: splitter_config,
            roster,
            metrics,
        }
    }

    pub fn roster(&self) -> &[StudentData] {
        &self.roster
    }

    /// The matcher, for re-running matches on manual edits.
    pub fn matcher(&self) -> &StudentMatcher {
        &self.matcher
    }

    /// Process one recognized utterance against the session.
    ///
    /// Termination sentinels are checked first; a terminating utterance
    /// appends nothing. Otherwise every segment of the utterance becomes
    /// one entry, classified on the spot.
    pub fn process(&self, session: &mut BatchSession, utterance: &str) -> UtteranceOutcome {
        self.metrics.utterances_in.fetch_add(1, Ordering::Relaxed);

        if self.splitter.is_termination(utterance) {
            info!(target: "voice", "termination word heard, ending session");
            return UtteranceOutcome::Terminated;
        }

        let mut appended = 0;
        for segment in split_segments(utterance) {
            self.metrics.segments_split.fetch_add(1, Ordering::Relaxed);
            let parsed = parse(&segment);
            let matches = parsed
                .recognized_name
                .as_deref()
                .map(|name| self.matcher.find_matches(name, &self.roster))
                .unwrap_or_default();

            let id = session.add(
                segment,
                parsed.recognized_name,
                parsed.score,
                matches.first(),
            );
            debug!(target: "voice", id, "appended batch entry");
            appended += 1;
        }

        UtteranceOutcome::Continue { appended }
    }
}
